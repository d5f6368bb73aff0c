use fieldmap::{schema::RawValue, Mode, SaveStatus};
use pretty_assertions::assert_eq;
use tests::{fixtures::*, Call, Session};

#[tokio::test]
async fn failed_transition_keeps_mode() {
    let mut session = Session::open(at(PRODUCT_ID)).await;
    session.faults.fail_next(1);

    let err = session.editor.set_mode(Mode::Original).await.unwrap_err();
    assert_eq!(err.to_string(), format!("injected failure; field={PRODUCT_ID}"));

    // The write was attempted once and nothing was refetched
    let (_, ok) = session.log.pop_op();
    assert!(!ok);
    assert!(session.log.is_empty());

    assert_eq!(session.editor.mode().unwrap(), Mode::Foreign);
    assert_eq!(session.editor.save_status(), SaveStatus::Failed);
    assert!(session.store.field(PRODUCT_ID).unwrap().dimension.is_external());
}

#[tokio::test]
async fn transition_can_be_retried() {
    let mut session = Session::open(at(PRODUCT_ID)).await;
    session.faults.fail_next(1);

    session.editor.set_mode(Mode::Original).await.unwrap_err();
    session.editor.set_mode(Mode::Original).await.unwrap();

    assert_eq!(session.editor.mode().unwrap(), Mode::Original);
    assert_eq!(session.editor.save_status(), SaveStatus::Saved);
    session.log.with_calls(|calls| {
        assert!(matches!(
            calls,
            [
                Call::Exec { ok: false, .. },
                Call::Exec { ok: true, .. },
                Call::FetchTable { .. }
            ]
        ));
    });
}

#[tokio::test]
async fn failed_repair_leaves_table_incomplete() {
    let mut session = Session::open(at(STATUS)).await;
    session.editor.set_mode(Mode::Custom).await.unwrap();
    session.log.clear();
    session.faults.fail_next(1);

    session.editor.begin_editing().await.unwrap_err();

    assert_eq!(session.editor.save_status(), SaveStatus::Failed);
    assert!(session.editor.field().unwrap().remapping.has_unset());

    // Retrying repairs with exactly one more write
    let buffer = session.editor.begin_editing().await.unwrap();
    assert!(buffer.is_savable());
    assert_eq!(session.log.mutations(), 2);
    assert!(session.editor.field().unwrap().remapping.is_complete());
}

#[tokio::test]
async fn failed_save_keeps_local_remappings() {
    let mut session = Session::open(at(PRIORITY)).await;
    let buffer = session
        .editor
        .begin_editing()
        .await
        .unwrap()
        .set_value(&RawValue::Int(1), "Lowest");
    session.faults.fail_next(1);

    session.editor.save_remappings(&buffer).await.unwrap_err();

    assert_eq!(session.editor.save_status(), SaveStatus::Failed);
    assert_eq!(
        session.editor.field().unwrap().remapping.get(&RawValue::Int(1)),
        Some(Some("Low"))
    );
}

#[tokio::test]
async fn failed_refetch_keeps_confirmed_delete() {
    let mut session = Session::open(at(PRODUCT_ID)).await;
    session.faults.fail_next_fetches(1);

    let err = session.editor.set_mode(Mode::Original).await.unwrap_err();
    assert_eq!(err.to_string(), format!("injected failure; table={ORDERS}"));

    // The delete landed, so the editor follows the server
    assert!(session.store.field(PRODUCT_ID).unwrap().dimension.is_none());
    assert_eq!(session.editor.mode().unwrap(), Mode::Original);
    assert_eq!(session.editor.save_status(), SaveStatus::Saved);

    // Foreign-only edits are refused without another write
    session.log.clear();
    let err = session
        .editor
        .set_foreign_target(PRODUCT_SKU)
        .await
        .unwrap_err();
    assert!(err.is_invalid_remapping_target(), "{err}");
    assert_eq!(session.log.mutations(), 0);
}

#[tokio::test]
async fn failed_refetch_keeps_confirmed_external_target() {
    let mut session = Session::open(at(BRAND_CODE)).await;
    session.faults.fail_next_fetches(1);

    session.editor.set_mode(Mode::Foreign).await.unwrap_err();

    assert_eq!(session.editor.mode().unwrap(), Mode::Foreign);
    assert_eq!(
        session.editor.field().unwrap().dimension,
        session.store.field(BRAND_CODE).unwrap().dimension
    );
    assert_eq!(
        session.editor.state().unwrap().foreign_target,
        Some(BRAND_NAME)
    );
}
