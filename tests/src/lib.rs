mod exec_log;
pub use exec_log::ExecLog;

mod failing_backend;
pub use failing_backend::FailingBackend;

pub mod fixtures;

pub use logging_backend::{Call, LoggingBackend};

use fieldmap::{FieldEditor, FieldLocation, FieldMutations, MetadataRepository};
use fieldmap_backend_mem::MemBackend;

use std::sync::Arc;

/// A backend serving both metadata reads and field mutations.
pub trait Backend: MetadataRepository + FieldMutations {}

impl<T: MetadataRepository + FieldMutations> Backend for T {}

/// One editing session wired through the logging and fault injection
/// layers.
///
/// Calls flow `LoggingBackend -> FailingBackend -> MemBackend`, so injected
/// failures are still recorded in the log.
pub struct Session {
    pub editor: FieldEditor,

    /// Direct handle on the stored metadata
    pub store: Arc<MemBackend>,

    pub faults: Arc<FailingBackend>,

    pub log: ExecLog,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

impl Session {
    /// Opens a session with default settings on the shop fixture.
    pub async fn open(location: FieldLocation) -> Session {
        Session::open_with(&FieldEditor::builder(), location).await
    }

    pub async fn open_with(
        builder: &fieldmap::editor::Builder,
        location: FieldLocation,
    ) -> Session {
        init_logging();

        let store = Arc::new(MemBackend::with_database(fixtures::shop()));
        let faults = Arc::new(FailingBackend::new(store.clone()));
        let backend = Arc::new(LoggingBackend::new(faults.clone()));
        let mut log = ExecLog::new(backend.calls_handle());

        let editor = builder.build(backend, location).await.unwrap();

        // Loading is not under test
        log.clear();

        Session {
            editor,
            store,
            faults,
            log,
        }
    }
}
