//! End-to-end lifecycle scenarios.

use std::sync::Arc;

use namma_salai_core::pipeline::{mark_complete, start_repair, submit_report, SessionContext};
use namma_salai_core::storage::status_summary;
use namma_salai_core::{
    open_store, ComplaintDraft, ComplaintStatus, ComplaintStore, District, FileBackend,
    MemoryBackend, Severity, StoreConfig, StoreError, SubmissionForm, TransitionPolicy,
};

#[test]
fn mg_road_lifecycle() -> anyhow::Result<()> {
    let store = ComplaintStore::new(Arc::new(MemoryBackend::new()), &StoreConfig::default());
    assert!(store.list().is_empty());

    let created = store.add(
        ComplaintDraft::new("MG Road", District::Chennai, Severity::High, "deep pothole"),
        None,
    )?;

    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, ComplaintStatus::Pending);

    store.update_status(created.id, ComplaintStatus::InProgress)?;
    assert_eq!(store.list()[0].status, ComplaintStatus::InProgress);

    store.update_status(created.id, ComplaintStatus::Completed)?;
    assert_eq!(store.list()[0].status, ComplaintStatus::Completed);
    Ok(())
}

#[test]
fn file_backed_store_survives_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = StoreConfig::default().with_data_dir(dir.path());

    let first = open_store(&config)?;
    let a = first.add(
        ComplaintDraft::new("Gandhipuram Main Road", District::Coimbatore, Severity::Critical, "Deep pothole causing accidents"),
        Some("Rajesh Kumar"),
    )?;
    let b = first.add(
        ComplaintDraft::new("KK Nagar 5th Cross", District::Madurai, Severity::Medium, "Multiple small potholes")
            .with_image("data:image/png;base64,iVBORw0KGgo="),
        None,
    )?;
    first.update_status(a.id, ComplaintStatus::InProgress)?;
    drop(first);

    let reopened = ComplaintStore::new(Arc::new(FileBackend::open(dir.path())?), &config);
    let listed = reopened.try_list()?;
    assert_eq!(listed.iter().map(|c| c.id).collect::<Vec<_>>(), vec![b.id, a.id]);
    assert_eq!(listed[1].status, ComplaintStatus::InProgress);
    assert_eq!(listed[0].image.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));

    // A fresh store keeps allocating above the ids already on disk.
    let c = reopened.add(
        ComplaintDraft::new("Sathy Road Junction", District::Erode, Severity::Low, "Minor road damage after rain"),
        None,
    )?;
    assert!(c.id > a.id && c.id > b.id);
    Ok(())
}

#[test]
fn reads_slot_written_by_browser_app() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("namma_salai_complaints.json"),
        r#"[{"id":1772400000000,"location":"Anna Nagar 2nd Street","district":"Chennai","severity":"High","description":"Large pothole near school zone","image":"data:image/jpeg;base64,/9j/4AAQ","user":"Current User","status":"pending","date":"2026-03-01"}]"#,
    )?;

    let store = open_store(&StoreConfig::default().with_data_dir(dir.path()))?;
    let listed = store.try_list()?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, 1772400000000);
    assert_eq!(listed[0].district, District::Chennai);
    Ok(())
}

#[test]
fn citizen_and_councillor_flow() -> anyhow::Result<()> {
    let config = StoreConfig {
        transition_policy: TransitionPolicy::Sequential,
        ..StoreConfig::default()
    };
    let store = open_store(&config)?;
    let citizen = SessionContext::new(Some("Anitha Devi"));
    let councillor = SessionContext::new(Some("Ward 12 Councillor"));

    let form = SubmissionForm {
        address: "KK Nagar 5th Cross".to_string(),
        district: "madurai".to_string(),
        severity: "medium".to_string(),
        description: "Multiple small potholes".to_string(),
        image: None,
    };
    let complaint = submit_report(&store, &citizen, &form)?;
    assert_eq!(complaint.user, "Anitha Devi");
    assert_eq!(complaint.district, District::Madurai);

    // Skipping straight to completed is not allowed under the sequential policy.
    let err = mark_complete(&store, &councillor, complaint.id).unwrap_err();
    assert!(matches!(err, StoreError::TransitionRejected { .. }));

    start_repair(&store, &councillor, complaint.id)?;
    let outcome = mark_complete(&store, &councillor, complaint.id)?;
    let notice = outcome.completed.expect("newly completed");
    assert_eq!(notice.user, "Anitha Devi");

    let summary = status_summary(&outcome.complaints);
    assert_eq!((summary.total, summary.completed), (1, 1));
    Ok(())
}
