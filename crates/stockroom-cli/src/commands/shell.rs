//! Interactive session: login loop and role-filtered menu.
//!
//! Each menu action opens a fresh store, runs one logical operation and
//! reports any error without ending the session. Only exhausting the login
//! attempts or picking Quit ends the process.

use owo_colors::OwoColorize;

use stockroom_core::auth::{Operation, Role, Session};
use stockroom_core::store::{MovementKind, NewUser};

use crate::app::AppContext;
use crate::output;
use crate::prompt;

/// Failed logins allowed before the session terminates.
const MAX_LOGIN_ATTEMPTS: u32 = 3;

/// One menu item; the operation gates whether a role sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddCategory,
    AddProduct,
    StockIn,
    StockOut,
    ListCategories,
    ListProducts,
    History,
    CreateUser,
    ListUsers,
    Logout,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::AddCategory => "Add a category",
            MenuAction::AddProduct => "Add a product",
            MenuAction::StockIn => "Stock entry",
            MenuAction::StockOut => "Stock exit",
            MenuAction::ListCategories => "List categories",
            MenuAction::ListProducts => "List products",
            MenuAction::History => "Movement history",
            MenuAction::CreateUser => "Create a user",
            MenuAction::ListUsers => "List users",
            MenuAction::Logout => "Log out",
            MenuAction::Quit => "Quit",
        }
    }

    /// The gate for this item, if any. Logout and Quit are ungated.
    fn operation(&self) -> Option<Operation> {
        match self {
            MenuAction::AddCategory => Some(Operation::AddCategory),
            MenuAction::AddProduct => Some(Operation::AddProduct),
            MenuAction::StockIn | MenuAction::StockOut => Some(Operation::AdjustStock),
            MenuAction::ListCategories | MenuAction::ListProducts => Some(Operation::ViewCatalog),
            MenuAction::History => Some(Operation::ViewHistory),
            MenuAction::CreateUser | MenuAction::ListUsers => Some(Operation::ManageUsers),
            MenuAction::Logout | MenuAction::Quit => None,
        }
    }
}

const MENU: [MenuAction; 11] = [
    MenuAction::AddCategory,
    MenuAction::AddProduct,
    MenuAction::StockIn,
    MenuAction::StockOut,
    MenuAction::ListCategories,
    MenuAction::ListProducts,
    MenuAction::History,
    MenuAction::CreateUser,
    MenuAction::ListUsers,
    MenuAction::Logout,
    MenuAction::Quit,
];

pub fn handle_shell(ctx: &AppContext) -> anyhow::Result<()> {
    loop {
        let Some(session) = login_with_attempts(ctx)? else {
            return Err(anyhow::anyhow!("Too many failed login attempts"));
        };
        println!(
            "\nWelcome {}! ({})",
            session.user().username.bold(),
            session.role()
        );

        // Returns on logout; the outer loop shows the login prompt again.
        if menu_loop(ctx, &session)? {
            return Ok(());
        }
    }
}

/// Prompt for credentials up to [`MAX_LOGIN_ATTEMPTS`] times.
///
/// Returns `Ok(None)` when the attempts are exhausted.
fn login_with_attempts(ctx: &AppContext) -> anyhow::Result<Option<Session>> {
    for attempt in 1..=MAX_LOGIN_ATTEMPTS {
        let email = prompt::email_input("Email")?;
        let password = prompt::password("Password")?;

        let store = ctx.open_store()?;
        match store.verify_login(&email, &password)? {
            Some(user) => return Ok(Some(Session::new(user))),
            None => {
                eprintln!("{} Email or password incorrect", "error:".red());
                let remaining = MAX_LOGIN_ATTEMPTS - attempt;
                if remaining > 0 {
                    eprintln!("{} attempt(s) remaining", remaining);
                }
            }
        }
    }
    Ok(None)
}

/// Run the menu until logout (returns `false`) or quit (returns `true`).
fn menu_loop(ctx: &AppContext, session: &Session) -> anyhow::Result<bool> {
    loop {
        let items: Vec<MenuAction> = MENU
            .into_iter()
            .filter(|action| match action.operation() {
                Some(op) => session.can(op),
                None => true,
            })
            .collect();
        let labels: Vec<&str> = items.iter().map(|action| action.label()).collect();

        let header = format!(
            "Main menu - {} ({})",
            session.user().username,
            session.role()
        );
        let choice = prompt::select(&header, &labels)?;

        match items[choice] {
            MenuAction::Logout => return Ok(false),
            MenuAction::Quit => return Ok(true),
            action => {
                if let Err(err) = run_action(ctx, session, action) {
                    eprintln!("{} {}", "error:".red(), err);
                }
            }
        }
    }
}

/// One logical operation: fresh store, gate, work, report.
fn run_action(ctx: &AppContext, session: &Session, action: MenuAction) -> anyhow::Result<()> {
    if let Some(op) = action.operation() {
        session.authorize(op)?;
    }
    match action {
        MenuAction::AddCategory => add_category(ctx),
        MenuAction::AddProduct => add_product(ctx),
        MenuAction::StockIn => move_stock(ctx, MovementKind::Entry),
        MenuAction::StockOut => move_stock(ctx, MovementKind::Exit),
        MenuAction::ListCategories => {
            let store = ctx.open_store()?;
            output::print_categories(&store.list_categories()?, false)
        }
        MenuAction::ListProducts => {
            let store = ctx.open_store()?;
            output::print_products(&store.list_products()?, false)
        }
        MenuAction::History => {
            let store = ctx.open_store()?;
            output::print_history(&store.list_history()?, false)
        }
        MenuAction::CreateUser => create_user(ctx),
        MenuAction::ListUsers => {
            let store = ctx.open_store()?;
            output::print_users(&store.list_users()?, false)
        }
        MenuAction::Logout | MenuAction::Quit => unreachable!("handled by the menu loop"),
    }
}

fn add_category(ctx: &AppContext) -> anyhow::Result<()> {
    let name = prompt::name_input("Category name", "Category name")?;
    let mut store = ctx.open_store()?;
    let id = store.add_category(&name)?;
    println!("Added category {} (id {})", name, id);
    Ok(())
}

fn add_product(ctx: &AppContext) -> anyhow::Result<()> {
    {
        let store = ctx.open_store()?;
        output::print_categories(&store.list_categories()?, false)?;
    }
    let name = prompt::name_input("Product name", "Product name")?;
    let category_id = prompt::id_input("Category id")?;

    let mut store = ctx.open_store()?;
    let id = store.add_product(&name, category_id)?;
    println!("Added product {} (id {}), quantity 0", name, id);
    Ok(())
}

fn move_stock(ctx: &AppContext, kind: MovementKind) -> anyhow::Result<()> {
    {
        let store = ctx.open_store()?;
        output::print_products(&store.list_products()?, false)?;
    }
    let product_id = prompt::id_input("Product id")?;
    let quantity = match kind {
        MovementKind::Entry => prompt::quantity_input("Quantity to add")?,
        MovementKind::Exit => prompt::quantity_input("Quantity to remove")?,
    };

    let mut store = ctx.open_store()?;
    let receipt = store.adjust_stock(product_id, quantity, kind)?;
    match kind {
        MovementKind::Entry => println!(
            "Added {}; quantity is now {}",
            receipt.quantity, receipt.new_quantity
        ),
        MovementKind::Exit => println!(
            "Removed {}; quantity is now {}",
            receipt.quantity, receipt.new_quantity
        ),
    }
    Ok(())
}

fn create_user(ctx: &AppContext) -> anyhow::Result<()> {
    let username = prompt::required_input("Username")?;
    let email = prompt::email_input("Email")?;
    let role_labels: Vec<&str> = Role::ALL.iter().map(|role| role.as_str()).collect();
    let role = Role::ALL[prompt::select("Role", &role_labels)?];
    let password = prompt::new_password()?;

    let mut store = ctx.open_store()?;
    let id = store.create_user(&NewUser::new(username.clone(), email, password, role))?;
    println!("User {} ({}) created (id {})", username, role, id);
    Ok(())
}
