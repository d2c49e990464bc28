/// Blocking yes/no prompt shown before destructive actions.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(message, "no confirmation dialog available, declining");
        false
    }
}
