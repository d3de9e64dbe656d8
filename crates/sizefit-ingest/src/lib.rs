pub mod discovery;
pub mod error;
pub mod loader;

pub use discovery::{BrandInfo, discover_brands};
pub use error::{IngestError, Result};
pub use loader::{CHART_FILE_NAME, chart_path, default_data_root, load_chart};
