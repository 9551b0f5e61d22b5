use anyhow::Context as _;
use invoice_extractor::Extraction;
use lambda_runtime::tracing::{self};
use models_invoice::{InvoiceRecord, OwnerId, ProcessingStatus};

use crate::context::Context;

/// Runs ocr over a single uploaded document and writes the extraction result.
/// When status tracking is enabled the record is marked `processing` first and `failed` if
/// anything after that goes wrong. The original error is always returned.
#[tracing::instrument(skip(ctx), fields(owner_id))]
pub async fn process_document(
    ctx: &Context,
    bucket: &str,
    key: &str,
) -> anyhow::Result<InvoiceRecord> {
    let owner_id = resolve_owner(ctx, bucket, key).await?;
    tracing::Span::current().record("owner_id", owner_id.as_str());

    let track_status = ctx.config.track_processing_status;

    if track_status {
        ctx.store
            .mark_processing(&owner_id, key)
            .await
            .context("unable to mark invoice as processing")?;
    }

    match extract_and_store(ctx, bucket, key, owner_id.clone()).await {
        Ok(record) => {
            tracing::info!(detected_total=%record.detected_total, "stored invoice");
            Ok(record)
        }
        Err(e) => {
            tracing::error!(error=?e, "unable to process invoice");

            if track_status {
                let reason = format!("{e:#}");
                if let Err(mark_err) = ctx.store.mark_failed(&owner_id, key, &reason).await {
                    tracing::error!(error=?mark_err, "unable to mark invoice as failed");
                }
            }

            Err(e)
        }
    }
}

/// The uploader's id travels as user metadata on the object. Objects without it belong to the
/// default owner.
async fn resolve_owner(ctx: &Context, bucket: &str, key: &str) -> anyhow::Result<OwnerId> {
    let metadata = ctx
        .metadata
        .get_user_metadata(bucket, key)
        .await
        .context("unable to read object metadata")?;

    let owner_id = metadata
        .get(&ctx.config.owner_metadata_key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(OwnerId::new)
        .unwrap_or_else(|| {
            tracing::debug!("no owner metadata on object, using default owner");
            ctx.config.default_owner_id.clone()
        });

    Ok(owner_id)
}

async fn extract_and_store(
    ctx: &Context,
    bucket: &str,
    key: &str,
    owner_id: OwnerId,
) -> anyhow::Result<InvoiceRecord> {
    let blocks = ctx
        .analyzer
        .analyze_document(bucket, key)
        .await
        .context("unable to analyze document")?;
    tracing::debug!(block_count = blocks.len(), "analyzed document");

    let Extraction {
        raw_text,
        detected_total,
    } = invoice_extractor::extract(&blocks);

    let record = InvoiceRecord {
        owner_id,
        document_id: key.to_string(),
        detected_total,
        raw_text,
        processing_status: ctx
            .config
            .track_processing_status
            .then_some(ProcessingStatus::Complete),
    };

    ctx.store
        .put_invoice(&record)
        .await
        .context("unable to store invoice")?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        service::{dynamodb::InvoiceStore, s3::ObjectMetadata, textract::DocumentAnalyzer},
    };
    use mockall::Sequence;
    use models_invoice::TextBlock;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    const BUCKET: &str = "invoice-uploads";
    const KEY: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479.pdf";

    fn config(track_processing_status: bool) -> Config {
        Config {
            table_name: "invoices".to_string(),
            default_owner_id: OwnerId::new("demo_user"),
            owner_metadata_key: "userid".to_string(),
            track_processing_status,
        }
    }

    fn context(
        analyzer: DocumentAnalyzer,
        metadata: ObjectMetadata,
        store: InvoiceStore,
        config: Config,
    ) -> Context {
        Context {
            analyzer: Arc::new(analyzer),
            metadata: Arc::new(metadata),
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    fn analyzer_returning(lines: &'static [&'static str]) -> DocumentAnalyzer {
        let mut analyzer = DocumentAnalyzer::default();
        analyzer
            .expect_analyze_document()
            .withf(|bucket, key| bucket == BUCKET && key == KEY)
            .times(1)
            .returning(move |_, _| Ok(lines.iter().map(|line| TextBlock::line(*line)).collect()));
        analyzer
    }

    fn metadata_returning(entries: &'static [(&'static str, &'static str)]) -> ObjectMetadata {
        let mut metadata = ObjectMetadata::default();
        metadata
            .expect_get_user_metadata()
            .withf(|bucket, key| bucket == BUCKET && key == KEY)
            .returning(move |_, _| {
                Ok(entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<HashMap<_, _>>())
            });
        metadata
    }

    fn recording_store(records: Arc<Mutex<Vec<InvoiceRecord>>>) -> InvoiceStore {
        let mut store = InvoiceStore::default();
        store.expect_put_invoice().returning(move |record| {
            records.lock().unwrap().push(record.clone());
            Ok(())
        });
        store
    }

    #[tokio::test]
    async fn stores_detected_total_and_raw_text() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let ctx = context(
            analyzer_returning(&["Total Due", "$123.45", "Thank you"]),
            metadata_returning(&[]),
            recording_store(records.clone()),
            config(false),
        );

        let record = process_document(&ctx, BUCKET, KEY).await.unwrap();

        let expected = InvoiceRecord {
            owner_id: OwnerId::new("demo_user"),
            document_id: KEY.to_string(),
            detected_total: "$123.45".to_string(),
            raw_text: "Total Due\n$123.45\nThank you\n".to_string(),
            processing_status: None,
        };
        assert_eq!(record, expected);
        assert_eq!(*records.lock().unwrap(), vec![expected]);
    }

    #[tokio::test]
    async fn missing_amount_stores_zero_total() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let ctx = context(
            analyzer_returning(&["Thank you for your business"]),
            metadata_returning(&[]),
            recording_store(records.clone()),
            config(false),
        );

        process_document(&ctx, BUCKET, KEY).await.unwrap();

        let records = records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].detected_total, "0.00");
        assert_eq!(records[0].raw_text, "Thank you for your business\n");
    }

    #[tokio::test]
    async fn owner_comes_from_object_metadata() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let ctx = context(
            analyzer_returning(&["$9.99"]),
            metadata_returning(&[("userid", "user-42")]),
            recording_store(records.clone()),
            config(false),
        );

        let record = process_document(&ctx, BUCKET, KEY).await.unwrap();
        assert_eq!(record.owner_id, OwnerId::new("user-42"));
    }

    #[tokio::test]
    async fn blank_owner_metadata_falls_back_to_default() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let ctx = context(
            analyzer_returning(&["$9.99"]),
            metadata_returning(&[("userid", "  ")]),
            recording_store(records.clone()),
            config(false),
        );

        let record = process_document(&ctx, BUCKET, KEY).await.unwrap();
        assert_eq!(record.owner_id, OwnerId::new("demo_user"));
    }

    #[tokio::test]
    async fn reprocessing_overwrites_the_whole_record() {
        let mut seq = Sequence::new();
        let mut analyzer = DocumentAnalyzer::default();
        analyzer
            .expect_analyze_document()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(vec![TextBlock::line("Total $10.00"), TextBlock::line("Notes")]));
        analyzer
            .expect_analyze_document()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(vec![TextBlock::line("Amended total $20.00")]));

        let records = Arc::new(Mutex::new(Vec::new()));
        let ctx = context(
            analyzer,
            metadata_returning(&[]),
            recording_store(records.clone()),
            config(false),
        );

        process_document(&ctx, BUCKET, KEY).await.unwrap();
        process_document(&ctx, BUCKET, KEY).await.unwrap();

        let records = records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].document_id, records[0].document_id);
        assert_eq!(records[1].detected_total, "$20.00");
        assert_eq!(records[1].raw_text, "Amended total $20.00\n");
    }

    #[tokio::test]
    async fn analysis_failure_writes_nothing() {
        let mut analyzer = DocumentAnalyzer::default();
        analyzer
            .expect_analyze_document()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("UnsupportedDocumentException")));

        let mut store = InvoiceStore::default();
        store.expect_put_invoice().times(0);
        store.expect_mark_processing().times(0);
        store.expect_mark_failed().times(0);

        let ctx = context(analyzer, metadata_returning(&[]), store, config(false));

        let err = process_document(&ctx, BUCKET, KEY).await.unwrap_err();
        assert!(format!("{err:#}").contains("UnsupportedDocumentException"));
    }

    #[tokio::test]
    async fn store_failure_is_returned() {
        let mut store = InvoiceStore::default();
        store
            .expect_put_invoice()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("ResourceNotFoundException")));

        let ctx = context(
            analyzer_returning(&["$1.00"]),
            metadata_returning(&[]),
            store,
            config(false),
        );

        assert!(process_document(&ctx, BUCKET, KEY).await.is_err());
    }

    #[tokio::test]
    async fn tracking_marks_processing_then_complete() {
        let mut seq = Sequence::new();
        let mut store = InvoiceStore::default();
        store
            .expect_mark_processing()
            .withf(|owner_id, invoice_id| owner_id.as_str() == "demo_user" && invoice_id == KEY)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        store
            .expect_put_invoice()
            .withf(|record| record.processing_status == Some(ProcessingStatus::Complete))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        store.expect_mark_failed().times(0);

        let ctx = context(
            analyzer_returning(&["$5.00"]),
            metadata_returning(&[]),
            store,
            config(true),
        );

        let record = process_document(&ctx, BUCKET, KEY).await.unwrap();
        assert_eq!(record.processing_status, Some(ProcessingStatus::Complete));
    }

    #[tokio::test]
    async fn tracking_marks_failure_and_returns_error() {
        let mut analyzer = DocumentAnalyzer::default();
        analyzer
            .expect_analyze_document()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("ThrottlingException")));

        let mut seq = Sequence::new();
        let mut store = InvoiceStore::default();
        store
            .expect_mark_processing()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        store
            .expect_mark_failed()
            .withf(|_, invoice_id, reason| {
                invoice_id == KEY && reason.contains("ThrottlingException")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        store.expect_put_invoice().times(0);

        let ctx = context(analyzer, metadata_returning(&[]), store, config(true));

        let err = process_document(&ctx, BUCKET, KEY).await.unwrap_err();
        assert!(format!("{err:#}").contains("ThrottlingException"));
    }

    #[tokio::test]
    async fn failed_marker_write_does_not_mask_original_error() {
        let mut analyzer = DocumentAnalyzer::default();
        analyzer
            .expect_analyze_document()
            .returning(|_, _| Err(anyhow::anyhow!("InvalidS3ObjectException")));

        let mut store = InvoiceStore::default();
        store.expect_mark_processing().returning(|_, _| Ok(()));
        store
            .expect_mark_failed()
            .times(1)
            .returning(|_, _, _| Err(anyhow::anyhow!("table is gone")));

        let ctx = context(analyzer, metadata_returning(&[]), store, config(true));

        let err = process_document(&ctx, BUCKET, KEY).await.unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("InvalidS3ObjectException"));
        assert!(!message.contains("table is gone"));
    }
}
