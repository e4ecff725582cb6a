//! Built-in storefront tables

use rust_decimal::Decimal;
use shared::models::{AddOnOption, CatalogItem, ItemKind, RegionalProduct, SizeOption};

pub const STORE_TITLE: &str = "MINA DE AÇAÍ";
pub const DEFAULT_SIZE_KEY: &str = "400ml";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    image: &str,
    kind: ItemKind,
    ingredients: &[&str],
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_price: Decimal::from(12),
        image: image.to_string(),
        kind,
        ingredients: strings(ingredients),
    }
}

pub fn items() -> Vec<CatalogItem> {
    vec![
        item(
            "1",
            "Açaí Super",
            "Para os que adoram sonho de valsa",
            "acai-super.png",
            ItemKind::ReadyMade,
            &[
                "Açaí",
                "Leite Condensado",
                "Granola",
                "Leite Ninho",
                "Sonho de Valsa",
                "Cobertura",
            ],
        ),
        item(
            "2",
            "Açaí Especial",
            "Combinação especial de sabores",
            "acai-especial.png",
            ItemKind::ReadyMade,
            &[
                "Açaí",
                "Leite Condensado",
                "Leite Ninho",
                "Bis",
                "Disquete",
                "Cobertura",
            ],
        ),
        item(
            "3",
            "Açaí Ovomaltine",
            "O clássico favorito com Ovomaltine",
            "acai-ovomaltine.png",
            ItemKind::ReadyMade,
            &[
                "Açaí",
                "Leite Condensado",
                "Leite Ninho",
                "Ovomaltine",
                "Amendoim",
                "Cobertura",
            ],
        ),
        item(
            "4",
            "Açaí Negresco",
            "Para os apaixonados por Negresco",
            "acai-negresco.png",
            ItemKind::ReadyMade,
            &["Açaí", "Leite Condensado", "Leite Ninho", "Negresco", "Cobertura"],
        ),
        item(
            "5",
            "Açaí Chocolate",
            "Explosão de chocolate",
            "acai-chocolate.png",
            ItemKind::ReadyMade,
            &["Açaí", "Leite Condensado", "Negresco", "Oreo", "Bis", "Cobertura"],
        ),
        item(
            "6",
            "Monte o Seu",
            "Crie seu açaí personalizado do seu jeito",
            "monte-o-seu.png",
            ItemKind::Custom,
            &[
                "Escolha até 4 complementos",
                "Leite Condensado",
                "Negresco",
                "Bis",
                "Banana",
                "Granola",
                "Oreo",
                "Ovomaltine",
                "Disquete",
                "Leite Ninho",
                "Paçoca",
                "Amendoim",
            ],
        ),
    ]
}

pub fn sizes() -> Vec<SizeOption> {
    [("300ml", 12, 4), ("400ml", 15, 5), ("500ml", 18, 5)]
        .into_iter()
        .map(|(key, price, complements)| SizeOption {
            key: key.to_string(),
            label: key.to_string(),
            price: Decimal::from(price),
            complement_allowance: complements,
        })
        .collect()
}

pub fn add_ons() -> Vec<AddOnOption> {
    // Prices in centavos
    [
        ("Granola", 200),
        ("Leite Condensado", 200),
        ("Leite Ninho", 300),
        ("Negresco", 300),
        ("Bis", 300),
        ("Oreo", 300),
        ("Ovomaltine", 300),
        ("Disquete", 300),
        ("Paçoca", 250),
        ("Amendoim", 200),
        ("Banana", 200),
        ("Morango", 400),
        ("Cobertura Chocolate", 200),
        ("Cobertura Caramelo", 200),
    ]
    .into_iter()
    .map(|(name, cents)| AddOnOption {
        name: name.to_string(),
        price: Decimal::new(cents, 2),
    })
    .collect()
}

pub fn regional() -> Vec<RegionalProduct> {
    vec![
        RegionalProduct {
            id: "p1".to_string(),
            name: "Porção de Camarão 100g".to_string(),
            price_label: "R$ 8,00".to_string(),
            image: "camarao.png".to_string(),
            price_on_request: false,
        },
        RegionalProduct {
            id: "p2".to_string(),
            name: "Litro de Açaí".to_string(),
            price_label: "Consultar Valor".to_string(),
            image: "litro-acai.png".to_string(),
            price_on_request: true,
        },
        RegionalProduct {
            id: "p3".to_string(),
            name: "Tapioca".to_string(),
            price_label: "R$ 3,00".to_string(),
            image: "tapioca.png".to_string(),
            price_on_request: false,
        },
        RegionalProduct {
            id: "p4".to_string(),
            name: "Kg de Farinha".to_string(),
            price_label: "R$ 7,00".to_string(),
            image: "farinha.png".to_string(),
            price_on_request: false,
        },
    ]
}
