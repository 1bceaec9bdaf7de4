mod shell;
pub use shell::Shell;

mod home;
pub use home::{Home, NotFound};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod guarded;
pub use guarded::{Dashboard, Insights, Orders, Profile, Suggestions};
