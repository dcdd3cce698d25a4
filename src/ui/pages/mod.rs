pub mod mixed;
pub mod parallel;
pub mod settings;
pub mod stable;

pub use mixed::MixedPage;
pub use parallel::ParallelPage;
pub use settings::SettingsPage;
pub use stable::StablePage;
