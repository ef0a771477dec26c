pub mod axis;
pub mod change;
pub mod config;
pub mod document;
pub mod editor;
pub mod field;
pub mod io;
pub mod logging;
pub mod utils;

// 重新导出主要结构
pub use axis::{Axis, RECORD_SIZE};
pub use change::ChangeValue;
pub use config::EditorConfig;
pub use document::{Document, EditableRegion};
pub use editor::{EditReport, FieldChange, GdbEditor};
pub use field::{Field, FieldType, Number};
pub use utils::{contains_keyword, create_backup, GdbError};

// 常量定义
pub const APP_NAME: &str = "GDBump";
