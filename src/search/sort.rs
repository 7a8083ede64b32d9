use crate::search::Card;

/// Values recognized by the sort dropdown. Anything else falls back to
/// the upstream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("price-asc") => SortKey::PriceAsc,
            Some("price-desc") => SortKey::PriceDesc,
            _ => SortKey::Default,
        }
    }
}

/// Sorts a copied card list by price. Missing prices count as zero.
pub fn sort_cards(cards: &mut [Card], key: SortKey) {
    let price = |card: &Card| card.property.price.unwrap_or(0.0);

    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => cards.sort_by(|a, b| price(a).total_cmp(&price(b))),
        SortKey::PriceDesc => cards.sort_by(|a, b| price(b).total_cmp(&price(a))),
    }
}
