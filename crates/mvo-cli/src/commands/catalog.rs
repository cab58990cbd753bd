use mvo_core::responses::SegmentAssignment;
use mvo_feed::Catalog;
use mvo_feed::classifier::classify;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mvo catalog`.
pub fn handle(
    action: &CatalogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::Segments => output(&assignments(ctx.feed.catalog()), flags.format),
    }
}

fn assignments(catalog: &Catalog) -> Vec<SegmentAssignment> {
    catalog
        .ideas()
        .iter()
        .map(|idea| SegmentAssignment {
            id: idea.id.clone(),
            title: idea.title.clone(),
            segment: classify(idea),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use mvo_core::enums::Segment;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_idea_gets_one_row() {
        let catalog = Catalog::seed().unwrap();
        let rows = assignments(&catalog);
        assert_eq!(rows.len(), catalog.len());

        let featured: Vec<&str> = rows
            .iter()
            .filter(|row| row.segment == Some(Segment::Featured))
            .map(|row| row.id.as_str())
            .collect();
        assert_eq!(featured, vec!["2", "14", "18"]);
    }
}
