//! SQLite-backed store.
//!
//! One `SqliteStore` wraps one connection. Callers open a fresh store per
//! logical operation and drop it on every exit path; the stock ledger's
//! dual write runs inside an explicit transaction whose drop is a
//! rollback, so a partial movement is never observable.

use std::num::NonZeroU32;
use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::{password, Role};
use crate::error::{Result, StockroomError};
use crate::store::row::{MovementRow, UserRow};
use crate::store::types::{
    Category, MovementKind, MovementReceipt, MovementRecord, NewUser, Product,
    ProductWithCategory, User,
};
use crate::store::validation::{validate_email, validate_name, validate_username};

/// Inventory store over SQLite.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if absent) the database at `path` and ensure the
    /// schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create the four tables if they do not exist yet. Idempotent.
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY,
                category_name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY,
                product_name TEXT NOT NULL,
                quantity INTEGER NOT NULL DEFAULT 0,
                category_id INTEGER NOT NULL,

                FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE CASCADE
            );

            CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY,
                quantity INTEGER NOT NULL,
                type TEXT NOT NULL,
                date TEXT NOT NULL,
                product_id INTEGER NOT NULL,

                FOREIGN KEY (product_id) REFERENCES products(id)
            );

            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                username TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'observer',
                created_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    // --- Credential store ---

    /// Whether any user account exists.
    pub fn has_users(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Create the first admin account if the user table is empty.
    ///
    /// Returns `Ok(None)` without touching the table when any user exists.
    /// This is the only path that creates a user without prior
    /// authentication.
    pub fn bootstrap_admin(&mut self, username: &str, email: &str, password: &str) -> Result<Option<i64>> {
        if self.has_users()? {
            return Ok(None);
        }
        let id = self.create_user(&NewUser::new(username, email, password, Role::Admin))?;
        Ok(Some(id))
    }

    /// Insert a user with a salted Argon2 hash of the password.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty username, malformed email or short
    /// password; `DuplicateEmail` if the email is already registered.
    pub fn create_user(&mut self, user: &NewUser) -> Result<i64> {
        validate_username(&user.username)?;
        validate_email(&user.email)?;
        password::validate_password(&user.password)?;

        let password_hash = password::hash_password(&user.password)?;
        let created_at = Utc::now().to_rfc3339();
        // Emails are stored lowercase so lookups agree across every entry
        // path (prompt, flag, env).
        let email = normalize_email(&user.email);
        self.conn
            .execute(
                "INSERT INTO users (username, email, password, role, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    user.username.trim(),
                    email,
                    password_hash,
                    user.role.as_str(),
                    created_at
                ],
            )
            .map_err(|e| match StockroomError::from(e) {
                StockroomError::DuplicateEmail(_) => StockroomError::DuplicateEmail(email.clone()),
                other => other,
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Look up a user by email and check the password.
    ///
    /// Returns `Ok(None)` for an unknown email and for a wrong password
    /// alike; callers cannot tell which, so login does not leak whether an
    /// account exists.
    pub fn verify_login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, username, email, password, role, created_at
                 FROM users WHERE email = ?1",
                params![normalize_email(email)],
                user_row,
            )
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };
        let user = User::try_from(row)?;
        if password::verify_password(password, &user.password_hash) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// All user accounts, ordered by role then username.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, email, password, role, created_at
             FROM users ORDER BY role, username",
        )?;
        let rows = stmt.query_map([], user_row)?;

        let mut users = Vec::new();
        for row in rows {
            users.push(User::try_from(row?)?);
        }
        Ok(users)
    }

    // --- Catalog manager ---

    /// Create a category.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty or over-long name; `DuplicateName` if the
    /// name is taken.
    pub fn add_category(&mut self, name: &str) -> Result<i64> {
        validate_name("Category name", name)?;
        let trimmed = name.trim();
        self.conn
            .execute(
                "INSERT INTO categories (category_name) VALUES (?1)",
                params![trimmed],
            )
            .map_err(|e| match StockroomError::from(e) {
                StockroomError::DuplicateName(_) => StockroomError::DuplicateName(trimmed.to_string()),
                other => other,
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All categories, ordered by id.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, category_name FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    /// Create a product under an existing category with quantity 0.
    ///
    /// # Errors
    ///
    /// `Validation` for a bad name; `ForeignKey` if the category does not
    /// exist.
    pub fn add_product(&mut self, name: &str, category_id: i64) -> Result<i64> {
        validate_name("Product name", name)?;
        self.conn
            .execute(
                "INSERT INTO products (product_name, quantity, category_id) VALUES (?1, 0, ?2)",
                params![name.trim(), category_id],
            )
            .map_err(|e| match StockroomError::from(e) {
                StockroomError::ForeignKey(_) => {
                    StockroomError::ForeignKey(format!("category {} does not exist", category_id))
                }
                other => other,
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a product by id.
    pub fn get_product(&self, id: i64) -> Result<Option<Product>> {
        let product = self
            .conn
            .query_row(
                "SELECT id, product_name, quantity, category_id FROM products WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Product {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        quantity: row.get(2)?,
                        category_id: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(product)
    }

    /// All products joined with their category name, ordered by id.
    pub fn list_products(&self) -> Result<Vec<ProductWithCategory>> {
        let mut stmt = self.conn.prepare(
            "SELECT products.id, products.product_name, products.quantity, categories.category_name
             FROM products JOIN categories ON products.category_id = categories.id
             ORDER BY products.id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ProductWithCategory {
                id: row.get(0)?,
                name: row.get(1)?,
                quantity: row.get(2)?,
                category: row.get(3)?,
            })
        })?;

        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }

    // --- Stock ledger ---

    /// Apply a stock movement: update the product's running quantity and
    /// append the matching history row, atomically.
    ///
    /// Both writes happen inside one transaction; if either fails the
    /// transaction guard rolls back on drop and no partial state remains.
    /// An `Exit` may drive the quantity negative; no floor is enforced.
    ///
    /// # Errors
    ///
    /// `NotFound` if the product does not exist (nothing is written);
    /// `Storage` for transaction failures (everything is rolled back).
    pub fn adjust_stock(
        &mut self,
        product_id: i64,
        quantity: NonZeroU32,
        kind: MovementKind,
    ) -> Result<MovementReceipt> {
        let magnitude = i64::from(quantity.get());
        let tx = self.conn.transaction()?;

        let updated = tx.execute(
            "UPDATE products SET quantity = quantity + ?1 WHERE id = ?2",
            params![kind.signed(magnitude), product_id],
        )?;
        if updated == 0 {
            return Err(StockroomError::NotFound(format!("product {}", product_id)));
        }

        let recorded_at = Utc::now();
        tx.execute(
            "INSERT INTO history (product_id, quantity, type, date) VALUES (?1, ?2, ?3, ?4)",
            params![product_id, magnitude, kind.as_str(), recorded_at.to_rfc3339()],
        )?;

        let new_quantity: i64 = tx.query_row(
            "SELECT quantity FROM products WHERE id = ?1",
            params![product_id],
            |row| row.get(0),
        )?;
        tx.commit()?;

        Ok(MovementReceipt {
            product_id,
            quantity: magnitude,
            kind,
            new_quantity,
            recorded_at,
        })
    }

    /// The full movement ledger joined with product names, newest first.
    pub fn list_history(&self) -> Result<Vec<MovementRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT history.product_id, products.product_name, history.quantity,
                    history.type, history.date
             FROM history JOIN products ON products.id = history.product_id
             ORDER BY history.date DESC, history.id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(MovementRow {
                product_id: row.get(0)?,
                product: row.get(1)?,
                quantity: row.get(2)?,
                kind: row.get(3)?,
                recorded_at: row.get(4)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(MovementRecord::try_from(row?)?);
        }
        Ok(records)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        role: row.get(4)?,
        created_at: row.get(5)?,
    })
}
