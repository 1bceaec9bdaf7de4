mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod widgets;
pub use widgets::{BarRow, ErrorBanner, ProgressBar, StatTile};

mod dashboard;
pub use dashboard::{DashboardView, RecentOrdersTable};

mod orders;
pub use orders::OrdersView;

mod insights;
pub use insights::InsightsView;

mod suggestions;
pub use suggestions::{SuggestionsView, GENERAL_TIPS};

mod profile;
pub use profile::ProfileView;

mod homepage;
pub use homepage::HomepageView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;
