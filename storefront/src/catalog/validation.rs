//! Load-time catalog checks
//!
//! Runtime lookups degrade to a zero price when a key is missing, so drift
//! between the tables would go unnoticed at request time. These checks run
//! once at startup and refuse to serve an inconsistent catalog.

use std::collections::HashSet;

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::ItemKind;

use super::Catalog;

/// Validate the catalog tables, returning every problem found
pub fn validate_catalog(catalog: &Catalog) -> AppResult<()> {
    let problems = collect_problems(catalog);
    if problems.is_empty() {
        return Ok(());
    }

    for problem in &problems {
        tracing::error!(problem = %problem, "Catalog validation failed");
    }
    Err(AppError::config(format!(
        "catalog has {} problem(s): {}",
        problems.len(),
        problems.join("; ")
    ))
    .with_detail("problems", problems))
}

fn collect_problems(catalog: &Catalog) -> Vec<String> {
    let mut problems = Vec::new();

    let mut item_ids = HashSet::new();
    for item in catalog.items() {
        if !item_ids.insert(item.id.as_str()) {
            problems.push(format!("duplicate catalog item id '{}'", item.id));
        }
        if item.base_price < Decimal::ZERO {
            problems.push(format!("catalog item '{}' has a negative price", item.id));
        }
    }
    if !catalog.items().iter().any(|i| i.kind == ItemKind::Custom) {
        problems.push("no build-your-own item in catalog".to_string());
    }

    let mut size_keys = HashSet::new();
    for size in catalog.sizes() {
        if !size_keys.insert(size.key.as_str()) {
            problems.push(format!("duplicate size key '{}'", size.key));
        }
        if size.price < Decimal::ZERO {
            problems.push(format!("size '{}' has a negative price", size.key));
        }
    }
    if !size_keys.contains(catalog.default_size()) {
        problems.push(format!(
            "default size '{}' is not in the size table",
            catalog.default_size()
        ));
    }

    let mut add_on_names = HashSet::new();
    for add_on in catalog.add_ons() {
        if !add_on_names.insert(add_on.name.as_str()) {
            problems.push(format!("duplicate add-on name '{}'", add_on.name));
        }
        if add_on.price < Decimal::ZERO {
            problems.push(format!("add-on '{}' has a negative price", add_on.name));
        }
    }

    let mut regional_ids = HashSet::new();
    for product in catalog.regional() {
        if !regional_ids.insert(product.id.as_str()) {
            problems.push(format!("duplicate regional product id '{}'", product.id));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data;
    use shared::error::ErrorCode;
    use shared::models::AddOnOption;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::builtin()).is_ok());
    }

    #[test]
    fn test_duplicate_add_on_rejected() {
        let mut add_ons = data::add_ons();
        add_ons.push(AddOnOption {
            name: "Granola".to_string(),
            price: Decimal::from(5),
        });
        let catalog = Catalog::new(
            data::items(),
            data::sizes(),
            add_ons,
            data::regional(),
            data::DEFAULT_SIZE_KEY,
        );

        let err = validate_catalog(&catalog).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("duplicate add-on name 'Granola'"));
    }

    #[test]
    fn test_missing_default_size_rejected() {
        let catalog = Catalog::new(
            data::items(),
            data::sizes(),
            data::add_ons(),
            data::regional(),
            "750ml",
        );
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.message.contains("default size '750ml'"));
    }

    #[test]
    fn test_all_problems_reported() {
        let mut sizes = data::sizes();
        sizes[0].price = Decimal::from(-1);
        let items: Vec<_> = data::items()
            .into_iter()
            .filter(|i| i.kind == ItemKind::ReadyMade)
            .collect();
        let catalog = Catalog::new(
            items,
            sizes,
            data::add_ons(),
            data::regional(),
            data::DEFAULT_SIZE_KEY,
        );

        let err = validate_catalog(&catalog).unwrap_err();
        let problems = err.details.unwrap();
        assert_eq!(problems["problems"].as_array().unwrap().len(), 2);
    }
}
