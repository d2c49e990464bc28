mod products;
pub use products::Products;

mod users;
pub use users::Users;

mod shell;
pub use shell::Shell;
