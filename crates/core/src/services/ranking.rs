use crate::models::summary::AssetSummary;

/// The asset with the highest P&L percentage, or `None` for an empty
/// portfolio. Ties resolve to the asset appearing first in the input
/// (stable sort).
pub fn best_performer(assets: &[AssetSummary]) -> Option<&AssetSummary> {
    let mut ranked: Vec<&AssetSummary> = assets.iter().collect();
    ranked.sort_by(|a, b| {
        b.pnl_percent
            .partial_cmp(&a.pnl_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.first().copied()
}

/// The asset with the lowest P&L percentage, or `None` for an empty
/// portfolio. Ties resolve to the asset appearing first in the input.
pub fn worst_performer(assets: &[AssetSummary]) -> Option<&AssetSummary> {
    let mut ranked: Vec<&AssetSummary> = assets.iter().collect();
    ranked.sort_by(|a, b| {
        a.pnl_percent
            .partial_cmp(&b.pnl_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.first().copied()
}

/// Filter assets by a substring match against the display name (as typed,
/// so Persian queries match Persian names) or against the symbol with the
/// query uppercased. Preserves input order.
pub fn search<'a>(assets: &'a [AssetSummary], query: &str) -> Vec<&'a AssetSummary> {
    let upper = query.to_uppercase();
    assets
        .iter()
        .filter(|a| a.name.contains(query) || a.symbol.contains(&upper))
        .collect()
}
