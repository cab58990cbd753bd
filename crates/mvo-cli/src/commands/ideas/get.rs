use mvo_core::responses::IdeaDetailResponse;
use mvo_feed::classifier::classify;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::output::table::render_table;

const MAX_CELL_WIDTH: usize = 64;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let idea = ctx.feed.require_idea(id).await?;
    let detail = IdeaDetailResponse::new(idea);
    if flags.format == OutputFormat::Table {
        println!("{}", detail_table(&detail));
        return Ok(());
    }
    output(&detail, flags.format)
}

/// Field/value table for the idea, followed by its content outline.
fn detail_table(detail: &IdeaDetailResponse) -> String {
    let idea = &detail.idea;
    let segment = classify(idea).map_or("-", |segment| segment.as_str());
    let fields = [
        ("id", idea.id.clone()),
        ("title", idea.title.clone()),
        ("author", idea.author.clone()),
        ("score", idea.score.to_string()),
        ("votes", idea.votes.to_string()),
        ("createdAt", idea.created_at.clone()),
        ("tags", idea.tags.join(", ")),
        ("segment", segment.to_string()),
        ("media", detail.media.len().to_string()),
    ];
    let rows: Vec<Vec<String>> = fields
        .into_iter()
        .map(|(field, value)| vec![field.to_string(), value])
        .collect();
    let mut out = render_table(&["field", "value"], &rows, MAX_CELL_WIDTH);

    if !detail.blocks.is_empty() {
        let blocks: Vec<Vec<String>> = detail
            .blocks
            .iter()
            .map(|block| vec![block.kind.clone(), block.summary.clone()])
            .collect();
        out.push_str("\n\n");
        out.push_str(&render_table(&["block", "summary"], &blocks, MAX_CELL_WIDTH));
    }
    out
}

#[cfg(test)]
mod tests {
    use mvo_feed::Catalog;

    use super::*;

    #[test]
    fn table_lists_fields_then_blocks() {
        let catalog = Catalog::seed().unwrap();
        let idea = catalog.find("1").unwrap().clone();
        let expected_blocks = idea.content.as_ref().map_or(0, Vec::len);
        let table = detail_table(&IdeaDetailResponse::new(idea));

        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("field"));
        assert!(lines[2].starts_with("id"));
        assert!(table.contains("forYou"));
        let block_header = lines
            .iter()
            .position(|line| line.starts_with("block"))
            .expect("content outline should follow");
        assert_eq!(lines.len() - block_header - 2, expected_blocks);
    }

    #[test]
    fn table_without_content_has_no_outline() {
        let catalog = Catalog::seed().unwrap();
        let idea = catalog.find("20").unwrap().clone();
        let table = detail_table(&IdeaDetailResponse::new(idea));
        assert!(!table.contains("summary"));
        assert_eq!(table.lines().count(), 11);
    }
}
