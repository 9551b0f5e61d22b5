use anyhow::Context;
use aws_sdk_textract::types::{Block, BlockType, Document, FeatureType, S3Object};
use models_invoice::{BlockKind, TextBlock};

/// Calls AnalyzeDocument with the FORMS feature on the referenced s3 object.
/// Line and word blocks are always part of the response.
#[tracing::instrument(skip(client))]
pub(crate) async fn analyze_document(
    client: &aws_sdk_textract::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<Vec<TextBlock>> {
    let document = Document::builder()
        .s3_object(S3Object::builder().bucket(bucket).name(key).build())
        .build();

    let response = client
        .analyze_document()
        .document(document)
        .feature_types(FeatureType::Forms)
        .send()
        .await
        .context(format!("textract could not analyze {key} in bucket {bucket}"))?;

    let blocks: Vec<TextBlock> = response
        .blocks
        .unwrap_or_default()
        .into_iter()
        .map(to_text_block)
        .collect();

    tracing::trace!(block_count = blocks.len(), "document analyzed");

    Ok(blocks)
}

fn to_text_block(block: Block) -> TextBlock {
    TextBlock {
        kind: block
            .block_type
            .map(to_block_kind)
            .unwrap_or_else(|| BlockKind::Other(String::new())),
        text: block.text,
    }
}

fn to_block_kind(block_type: BlockType) -> BlockKind {
    match block_type {
        BlockType::Page => BlockKind::Page,
        BlockType::Line => BlockKind::Line,
        BlockType::Word => BlockKind::Word,
        BlockType::KeyValueSet => BlockKind::KeyValueSet,
        other => BlockKind::Other(other.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_textract_blocks_in_order() {
        let blocks = vec![
            Block::builder().block_type(BlockType::Page).build(),
            Block::builder()
                .block_type(BlockType::Line)
                .text("Total Due")
                .build(),
            Block::builder()
                .block_type(BlockType::Word)
                .text("Total")
                .build(),
            Block::builder()
                .block_type(BlockType::KeyValueSet)
                .build(),
            Block::builder()
                .block_type(BlockType::Table)
                .build(),
            Block::builder().text("orphan").build(),
        ];

        let mapped: Vec<TextBlock> = blocks.into_iter().map(to_text_block).collect();

        assert_eq!(
            mapped,
            vec![
                TextBlock {
                    kind: BlockKind::Page,
                    text: None
                },
                TextBlock::line("Total Due"),
                TextBlock {
                    kind: BlockKind::Word,
                    text: Some("Total".to_string())
                },
                TextBlock {
                    kind: BlockKind::KeyValueSet,
                    text: None
                },
                TextBlock {
                    kind: BlockKind::Other("TABLE".to_string()),
                    text: None
                },
                TextBlock {
                    kind: BlockKind::Other(String::new()),
                    text: Some("orphan".to_string())
                },
            ]
        );
    }
}
