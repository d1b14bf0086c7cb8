//! SQLite persistence for the four raw tables.
//!
//! RULE: Only store.rs talks to the database.
//! The rest of the crate goes through load_dataset / insert_dataset.

use crate::{
    dataset::{Client, Dataset, Product, SaleRecord, Seller},
    error::{DashError, DashResult},
};
use chrono::NaiveDate;
use rusqlite::{params, Connection};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct SalesStore {
    conn: Connection,
}

impl SalesStore {
    /// Open (or create) the sales database at `path`.
    pub fn open(path: &str) -> DashResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> DashResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Create the four tables if they do not exist.
    ///
    /// Sales carry no FK constraints on purpose: an unmatched foreign key is
    /// valid data that the join stage resolves to absent fields.
    pub fn init_schema(&self) -> DashResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS products (
                 id         INTEGER PRIMARY KEY,
                 name       TEXT NOT NULL,
                 sale_price REAL NOT NULL,
                 cost_price REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS clients (
                 id   INTEGER PRIMARY KEY,
                 name TEXT NOT NULL,
                 city TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS sellers (
                 id   INTEGER PRIMARY KEY,
                 name TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS sales (
                 id         INTEGER PRIMARY KEY AUTOINCREMENT,
                 sale_date  TEXT    NOT NULL,
                 product_id INTEGER NOT NULL,
                 client_id  INTEGER NOT NULL,
                 seller_id  INTEGER NOT NULL,
                 quantity   INTEGER NOT NULL CHECK (quantity > 0)
             );",
        )?;
        Ok(())
    }

    /// Write a full dataset. Replaces any existing rows.
    pub fn insert_dataset(&mut self, dataset: &Dataset) -> DashResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(
            "DELETE FROM sales;
             DELETE FROM products;
             DELETE FROM clients;
             DELETE FROM sellers;",
        )?;

        for p in &dataset.products {
            tx.execute(
                "INSERT INTO products (id, name, sale_price, cost_price)
                 VALUES (?1, ?2, ?3, ?4)",
                params![p.id, p.name, p.sale_price, p.cost_price],
            )?;
        }
        for c in &dataset.clients {
            tx.execute(
                "INSERT INTO clients (id, name, city) VALUES (?1, ?2, ?3)",
                params![c.id, c.name, c.city],
            )?;
        }
        for s in &dataset.sellers {
            tx.execute(
                "INSERT INTO sellers (id, name) VALUES (?1, ?2)",
                params![s.id, s.name],
            )?;
        }
        for sale in &dataset.sales {
            tx.execute(
                "INSERT INTO sales (sale_date, product_id, client_id, seller_id, quantity)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    sale.sale_date.format(DATE_FORMAT).to_string(),
                    sale.product_id,
                    sale.client_id,
                    sale.seller_id,
                    sale.quantity,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Read the four tables back, preserving sales insertion order.
    pub fn load_dataset(&self) -> DashResult<Dataset> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, sale_price, cost_price FROM products ORDER BY id")?;
        let products = stmt
            .query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    sale_price: row.get(2)?,
                    cost_price: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self
            .conn
            .prepare("SELECT id, name, city FROM clients ORDER BY id")?;
        let clients = stmt
            .query_map([], |row| {
                Ok(Client {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    city: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM sellers ORDER BY id")?;
        let sellers = stmt
            .query_map([], |row| {
                Ok(Seller {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT sale_date, product_id, client_id, seller_id, quantity
             FROM sales ORDER BY id",
        )?;
        let raw_sales = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, u32>(1)?,
                    row.get::<_, u32>(2)?,
                    row.get::<_, u32>(3)?,
                    row.get::<_, u32>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut sales = Vec::with_capacity(raw_sales.len());
        for (date_text, product_id, client_id, seller_id, quantity) in raw_sales {
            let sale_date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
                .map_err(|_| DashError::InvalidDate { value: date_text })?;
            sales.push(SaleRecord {
                sale_date,
                product_id,
                client_id,
                seller_id,
                quantity,
            });
        }

        log::info!(
            "loaded dataset from sqlite: {} sales, {} products, {} clients, {} sellers",
            sales.len(),
            products.len(),
            clients.len(),
            sellers.len()
        );

        Ok(Dataset {
            sales,
            products,
            clients,
            sellers,
        })
    }
}
