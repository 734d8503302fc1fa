//! Shopping scripts.
//!
//! A script is one command per line. Blank lines and lines starting with
//! `#` are skipped; arguments with spaces go in double quotes.
//!
//! ```text
//! add <product-id> [quantity]
//! qty <product-id> <quantity>        # 0 or less removes the line
//! remove <product-id>
//! clear
//! cart
//! discount [code]                    # no code removes the applied one
//! checkout <email> <first> <last> <street> <city> <zip> <country>
//! login <email> <password>
//! signup <name> <email> <password> [confirm]
//! logout
//! dashboard
//! ```

use accent_auth::{AuthError, Landing, SignupRequest, User};
use accent_commerce::prelude::*;
use anyhow::{anyhow, bail, Context as _, Result};
use serde::Serialize;

use crate::storefront::Storefront;

/// A parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { id: ProductId, quantity: i64 },
    Qty { id: ProductId, quantity: i64 },
    Remove { id: ProductId },
    Clear,
    Cart,
    Discount { code: Option<String> },
    Checkout { contact: ContactInfo, address: Address },
    Login { email: String, password: String },
    Signup(SignupRequest),
    Logout,
    Dashboard,
}

/// A command with its position in the script.
#[derive(Debug, Clone)]
pub struct Line {
    /// 1-based line number.
    pub number: usize,
    /// Source text, trimmed.
    pub text: String,
    pub command: Command,
}

/// What a command did, for display or JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Outcome {
    CartChanged {
        revision: u64,
        item_count: i64,
        subtotal: Money,
    },
    Cart {
        lines: Vec<LineItemPricing>,
        summary: CheckoutSummary,
    },
    DiscountApplied(AppliedDiscount),
    DiscountRemoved {
        removed: bool,
    },
    OrderPlaced(Order),
    LoggedIn {
        user: User,
        landing: Landing,
    },
    LoggedOut {
        user: Option<User>,
    },
    Dashboard {
        user: User,
    },
}

/// Parse a whole script. Fails on the first malformed line.
pub fn parse(source: &str) -> Result<Vec<Line>> {
    let mut lines = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let number = index + 1;
        let command = parse_line(text).with_context(|| format!("line {}: {}", number, text))?;
        lines.push(Line {
            number,
            text: text.to_string(),
            command,
        });
    }

    Ok(lines)
}

/// Parse a single command line.
pub fn parse_line(text: &str) -> Result<Command> {
    let tokens = tokenize(text)?;
    let Some((name, args)) = tokens.split_first() else {
        bail!("empty command");
    };

    let command = match (name.as_str(), args) {
        ("add", [id]) => Command::Add {
            id: ProductId::new(id.as_str()),
            quantity: 1,
        },
        ("add", [id, quantity]) => Command::Add {
            id: ProductId::new(id.as_str()),
            quantity: parse_quantity(quantity)?,
        },
        ("qty", [id, quantity]) => Command::Qty {
            id: ProductId::new(id.as_str()),
            quantity: parse_quantity(quantity)?,
        },
        ("remove", [id]) => Command::Remove {
            id: ProductId::new(id.as_str()),
        },
        ("clear", []) => Command::Clear,
        ("cart", []) => Command::Cart,
        ("discount", []) => Command::Discount { code: None },
        ("discount", [code]) => Command::Discount {
            code: Some(code.clone()),
        },
        ("checkout", [email, first, last, street, city, zip, country]) => Command::Checkout {
            contact: ContactInfo::new(email.as_str()),
            address: Address::new(
                first.as_str(),
                last.as_str(),
                street.as_str(),
                city.as_str(),
                zip.as_str(),
                country.as_str(),
            ),
        },
        ("login", [email, password]) => Command::Login {
            email: email.clone(),
            password: password.clone(),
        },
        ("signup", [name, email, password]) => {
            Command::Signup(SignupRequest::new(name, email, password, password))
        }
        ("signup", [name, email, password, confirm]) => {
            Command::Signup(SignupRequest::new(name, email, password, confirm))
        }
        ("logout", []) => Command::Logout,
        ("dashboard", []) => Command::Dashboard,
        (
            "add" | "qty" | "remove" | "clear" | "cart" | "discount" | "checkout" | "login"
            | "signup" | "logout" | "dashboard",
            _,
        ) => bail!("wrong number of arguments for `{}`", name),
        (other, _) => bail!("unknown command `{}`", other),
    };

    Ok(command)
}

/// Run one command against the storefront.
pub async fn execute(store: &mut Storefront, command: &Command) -> Result<Outcome> {
    let outcome = match command {
        Command::Add { id, quantity } => cart_changed(store.add_product(id, *quantity)?),
        Command::Qty { id, quantity } => {
            cart_changed(store.cart_mut().update_quantity(id, *quantity))
        }
        Command::Remove { id } => cart_changed(store.cart_mut().remove_item(id)),
        Command::Clear => cart_changed(store.cart_mut().clear()),
        Command::Cart => Outcome::Cart {
            lines: store.cart().pricing().line_items,
            summary: store.summary(),
        },
        Command::Discount { code: Some(code) } => {
            Outcome::DiscountApplied(store.apply_discount(code)?)
        }
        Command::Discount { code: None } => Outcome::DiscountRemoved {
            removed: store.remove_discount(),
        },
        Command::Checkout { contact, address } => {
            Outcome::OrderPlaced(store.place_order(contact.clone(), address.clone())?)
        }
        Command::Login { email, password } => {
            let user = store.auth_mut().login(email, password).await?.clone();
            Outcome::LoggedIn {
                landing: user.landing(),
                user,
            }
        }
        Command::Signup(request) => {
            let user = store.auth_mut().signup(request.clone()).await?.clone();
            Outcome::LoggedIn {
                landing: user.landing(),
                user,
            }
        }
        Command::Logout => Outcome::LoggedOut {
            user: store.auth_mut().logout(),
        },
        Command::Dashboard => Outcome::Dashboard {
            user: store.dashboard()?.clone(),
        },
    };

    Ok(outcome)
}

/// Check if a failed command is something a shopper causes and can
/// recover from, as opposed to a broken config or provider.
pub fn is_recoverable(err: &anyhow::Error) -> bool {
    if let Some(e) = err.downcast_ref::<CommerceError>() {
        return e.is_user_error();
    }
    if let Some(e) = err.downcast_ref::<AuthError>() {
        return !matches!(e, AuthError::Internal(_));
    }
    false
}

fn cart_changed(state: &CartState) -> Outcome {
    Outcome::CartChanged {
        revision: state.revision(),
        item_count: state.item_count(),
        subtotal: state.subtotal(),
    }
}

fn parse_quantity(s: &str) -> Result<i64> {
    s.parse()
        .map_err(|_| anyhow!("quantity must be a whole number, got `{}`", s))
}

fn tokenize(text: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut started = false;

    for c in text.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }

    if in_quotes {
        bail!("unterminated quote");
    }
    if started {
        tokens.push(current);
    }
    Ok(tokens)
}
