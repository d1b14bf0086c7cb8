//! The fixed mock catalog: 10 products, 10 clients, 5 sellers.
//!
//! These are the literal reference rows the mock dataset is built over.
//! Invariants: ids unique within each table, prices non-negative.

use crate::dataset::{Client, Product, Seller};

pub fn products() -> Vec<Product> {
    const ROWS: &[(u32, &str, f64, f64)] = &[
        (101, "Laptop Pro X", 4500.00, 3000.00),
        (102, "Monitor Ultra HD", 1800.00, 1200.00),
        (103, "Teclado Mecânico", 350.00, 150.00),
        (104, "Mouse Sem Fio", 150.00, 50.00),
        (105, "Webcam 4K", 500.00, 200.00),
        (106, "Headset Gamer", 400.00, 180.00),
        (107, "SSD 1TB", 600.00, 300.00),
        (108, "Roteador Wi-Fi 6", 750.00, 350.00),
        (109, "Impressora Laser", 1200.00, 500.00),
        (110, "Cadeira Ergonómica", 900.00, 400.00),
    ];
    ROWS.iter()
        .map(|&(id, name, sale_price, cost_price)| Product {
            id,
            name: name.to_string(),
            sale_price,
            cost_price,
        })
        .collect()
}

pub fn clients() -> Vec<Client> {
    const ROWS: &[(u32, &str, &str)] = &[
        (201, "Ana Silva", "Lisboa"),
        (202, "Bruno Costa", "Porto"),
        (203, "Carla Dias", "Coimbra"),
        (204, "Daniel Esteves", "Lisboa"),
        (205, "Elisa Ferreira", "Faro"),
        (206, "Fábio Gomes", "Porto"),
        (207, "Helena Ivo", "Braga"),
        (208, "Igor Jorge", "Coimbra"),
        (209, "Joana Lima", "Lisboa"),
        (210, "Luís Martins", "Faro"),
    ];
    ROWS.iter()
        .map(|&(id, name, city)| Client {
            id,
            name: name.to_string(),
            city: city.to_string(),
        })
        .collect()
}

pub fn sellers() -> Vec<Seller> {
    const ROWS: &[(u32, &str)] = &[
        (301, "Maria"),
        (302, "João"),
        (303, "Sofia"),
        (304, "Pedro"),
        (305, "Inês"),
    ];
    ROWS.iter()
        .map(|&(id, name)| Seller {
            id,
            name: name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let p: HashSet<_> = super::products().iter().map(|p| p.id).collect();
        let c: HashSet<_> = super::clients().iter().map(|c| c.id).collect();
        let s: HashSet<_> = super::sellers().iter().map(|s| s.id).collect();
        assert_eq!(p.len(), 10);
        assert_eq!(c.len(), 10);
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn prices_are_non_negative() {
        for p in super::products() {
            assert!(p.sale_price >= 0.0, "{} sale price", p.name);
            assert!(p.cost_price >= 0.0, "{} cost price", p.name);
        }
    }
}
