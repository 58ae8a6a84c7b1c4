//! The prize catalog: a fixed, read-only list of prizes redeemable for
//! tokens. Stock numbers are display data only; redemption never mutates
//! the catalog.

use crate::wallet::Profile;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no prize with id {0}")]
    UnknownPrize(u32),
    #[error("prize costs {cost} tokens but only {tokens} are available")]
    NotEnoughTokens { cost: u64, tokens: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prize {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub category: &'static str,
    pub stock: u32,
}

pub const CATALOG: &[Prize] = &[
    Prize {
        id: 1,
        name: "CMU T-Shirt",
        description: "Official Carnegie Mellon University t-shirt",
        cost: 100,
        category: "Apparel",
        stock: 50,
    },
    Prize {
        id: 2,
        name: "Coffee Voucher",
        description: "Free coffee at any campus coffee shop",
        cost: 50,
        category: "Food & Drinks",
        stock: 100,
    },
    Prize {
        id: 3,
        name: "CMU Sticker Pack",
        description: "Set of 5 CMU-themed stickers",
        cost: 20,
        category: "Merchandise",
        stock: 200,
    },
    Prize {
        id: 4,
        name: "Tech Store Voucher",
        description: "$10 off at the CMU Tech Store",
        cost: 80,
        category: "Vouchers",
        stock: 30,
    },
    Prize {
        id: 5,
        name: "Library Extended Hours",
        description: "24-hour access to the library for a week",
        cost: 75,
        category: "Services",
        stock: 40,
    },
    Prize {
        id: 6,
        name: "CMU Hoodie",
        description: "Warm and comfortable CMU hoodie",
        cost: 150,
        category: "Apparel",
        stock: 25,
    },
    Prize {
        id: 7,
        name: "Meal Swipe",
        description: "One free meal at any campus dining location",
        cost: 60,
        category: "Food & Drinks",
        stock: 75,
    },
    Prize {
        id: 8,
        name: "Parking Pass",
        description: "One week of free parking on campus",
        cost: 90,
        category: "Services",
        stock: 15,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortBy {
    pub fn next(self) -> Self {
        match self {
            SortBy::PriceAsc => SortBy::PriceDesc,
            SortBy::PriceDesc => SortBy::NameAsc,
            SortBy::NameAsc => SortBy::NameDesc,
            SortBy::NameDesc => SortBy::PriceAsc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::PriceAsc => "price ↑",
            SortBy::PriceDesc => "price ↓",
            SortBy::NameAsc => "name A-Z",
            SortBy::NameDesc => "name Z-A",
        }
    }
}

/// Distinct categories in catalog order.
pub fn categories() -> Vec<&'static str> {
    let mut out = Vec::new();
    for prize in CATALOG {
        if !out.contains(&prize.category) {
            out.push(prize.category);
        }
    }
    out
}

/// Filter by category (None = all) and a case-insensitive name/description
/// query, then sort.
pub fn search(category: Option<&str>, query: &str, sort: SortBy) -> Vec<&'static Prize> {
    let query = query.to_lowercase();
    let mut prizes: Vec<&'static Prize> = CATALOG
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| {
            query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
        })
        .collect();

    match sort {
        SortBy::PriceAsc => prizes.sort_by_key(|p| p.cost),
        SortBy::PriceDesc => prizes.sort_by_key(|p| std::cmp::Reverse(p.cost)),
        SortBy::NameAsc => prizes.sort_by_key(|p| p.name),
        SortBy::NameDesc => prizes.sort_by_key(|p| std::cmp::Reverse(p.name)),
    }
    prizes
}

pub fn find(id: u32) -> Option<&'static Prize> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Spend tokens on a prize and record the redemption on the profile.
pub fn redeem(profile: &mut Profile, id: u32) -> Result<&'static Prize, CatalogError> {
    let prize = find(id).ok_or(CatalogError::UnknownPrize(id))?;
    if profile.tokens < prize.cost {
        return Err(CatalogError::NotEnoughTokens {
            cost: prize.cost,
            tokens: profile.tokens,
        });
    }
    profile.tokens -= prize.cost;
    profile.redeemed.push(prize.id);
    Ok(prize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_categories_are_distinct() {
        let cats = categories();
        assert_eq!(cats.len(), 5);
        assert!(cats.contains(&"Apparel"));
        assert!(cats.contains(&"Services"));
    }

    #[test]
    fn test_search_by_category() {
        let apparel = search(Some("Apparel"), "", SortBy::PriceAsc);
        assert_eq!(apparel.len(), 2);
        assert!(apparel.iter().all(|p| p.category == "Apparel"));
    }

    #[test]
    fn test_search_query_matches_description_case_insensitive() {
        let hits = search(None, "COFFEE", SortBy::PriceAsc);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Coffee Voucher");
    }

    #[test]
    fn test_sort_orders() {
        let by_price = search(None, "", SortBy::PriceAsc);
        assert!(by_price.windows(2).all(|w| w[0].cost <= w[1].cost));

        let by_price_desc = search(None, "", SortBy::PriceDesc);
        assert!(by_price_desc.windows(2).all(|w| w[0].cost >= w[1].cost));

        let by_name = search(None, "", SortBy::NameAsc);
        assert!(by_name.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_redeem_debits_tokens_and_records_id() {
        let mut profile = Profile {
            tokens: 120,
            ..Profile::default()
        };
        let prize = redeem(&mut profile, 2).unwrap();
        assert_eq!(prize.name, "Coffee Voucher");
        assert_eq!(profile.tokens, 70);
        assert_eq!(profile.redeemed, vec![2]);
    }

    #[test]
    fn test_redeem_without_tokens_fails() {
        let mut profile = Profile {
            tokens: 10,
            ..Profile::default()
        };
        let err = redeem(&mut profile, 1).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotEnoughTokens {
                cost: 100,
                tokens: 10
            }
        );
        assert_eq!(profile.tokens, 10);
        assert!(profile.redeemed.is_empty());
    }

    #[test]
    fn test_redeem_unknown_prize() {
        let mut profile = Profile {
            tokens: 1000,
            ..Profile::default()
        };
        assert_eq!(redeem(&mut profile, 99), Err(CatalogError::UnknownPrize(99)));
    }
}
