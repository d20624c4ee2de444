//! # Storefront Shell
//!
//! Command parsing and per-screen dispatch for the terminal storefront.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Session                                   │
//! │                                                                         │
//! │  User Input               Shell Dispatch           Core Operation       │
//! │  ──────────               ──────────────           ──────────────       │
//! │                                                                         │
//! │  "enter" ───────────────► Welcome → Browsing       flow.transition_to   │
//! │                                                                         │
//! │  "buy 3" ───────────────► purchase + cart.add      catalog.purchase     │
//! │                                                                         │
//! │  "cart" ────────────────► Browsing → CartView      cart.items/total     │
//! │                                                                         │
//! │  "checkout" ────────────► → Checkout (non-empty)   (order summary)      │
//! │                                                                         │
//! │  "confirm" ─────────────► → Confirmed              Receipt + clear      │
//! │  "cancel" ──────────────► → Browsing               (cart untouched)     │
//! │                                                                         │
//! │  "quit" ────────────────► session ends; all state is discarded          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All business decisions live in `readnest-core`; this module only parses,
//! dispatches, and renders. Recoverable core errors (out of stock, empty
//! cart, illegal screen change) become dialog messages, never process exits.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use readnest_core::{CoreError, Receipt, Screen, SharedCatalog, StoreFlow, User};

use crate::config::StoreConfig;
use crate::error::ShellResult;

// =============================================================================
// Commands
// =============================================================================

/// A parsed storefront command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter the store from the welcome screen.
    Enter,
    /// Show the catalog listing.
    List,
    /// Purchase one copy of the n-th listed book (1-based).
    Buy(usize),
    /// Open the cart view.
    ViewCart,
    /// Return from the cart view to browsing.
    Back,
    /// Open the checkout order summary.
    Checkout,
    /// Confirm the purchase at checkout.
    Confirm,
    /// Cancel at checkout and return to browsing.
    Cancel,
    /// Show the commands available on the current screen.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses one input line. Returns `None` for blank or unknown input.
    pub fn parse(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let head = words.next()?.to_ascii_lowercase();

        let command = match head.as_str() {
            "enter" => Command::Enter,
            "list" | "books" => Command::List,
            "buy" | "add" => {
                let n: usize = words.next()?.parse().ok()?;
                Command::Buy(n)
            }
            "cart" => Command::ViewCart,
            "back" | "close" => Command::Back,
            "checkout" => Command::Checkout,
            "confirm" => Command::Confirm,
            "cancel" => Command::Cancel,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return None,
        };

        // Trailing junk means the line was not what we thought it was.
        if words.next().is_some() {
            return None;
        }

        Some(command)
    }
}

/// What a dispatched command produced: text to show, and whether to stop.
#[derive(Debug)]
pub struct Outcome {
    pub message: String,
    pub quit: bool,
}

impl Outcome {
    fn show(message: impl Into<String>) -> Self {
        Outcome {
            message: message.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Outcome {
            message: "Goodbye!".to_string(),
            quit: true,
        }
    }
}

// =============================================================================
// Shell
// =============================================================================

/// The interactive storefront: owns the session state and dispatches
/// commands against the core.
pub struct Shell {
    catalog: SharedCatalog,
    user: User,
    flow: StoreFlow,
    config: StoreConfig,
}

impl Shell {
    /// Creates a shell for one session.
    pub fn new(catalog: SharedCatalog, user: User, config: StoreConfig) -> Self {
        Shell {
            catalog,
            user,
            flow: StoreFlow::new(),
            config,
        }
    }

    /// Read-eval-print loop over the given streams until quit or EOF.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> ShellResult<()> {
        writeln!(out, "Welcome to {}", self.config.store_name)?;
        writeln!(out, "Your Online Bookstore")?;
        writeln!(out, "User: {}", self.user.name())?;
        writeln!(out, "{}", self.help_text())?;

        for line in input.lines() {
            let line = line?;
            let outcome = match Command::parse(&line) {
                Some(command) => self.dispatch(command),
                None => Outcome::show(format!(
                    "Unrecognized input. {}",
                    self.help_text()
                )),
            };

            writeln!(out, "{}", outcome.message)?;
            if outcome.quit {
                return Ok(());
            }
            write!(out, "{}> ", self.flow.screen().to_string().to_lowercase())?;
            out.flush()?;
        }

        Ok(())
    }

    /// Executes one command against the current screen.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        debug!(screen = %self.flow.screen(), ?command, "dispatch");

        match command {
            Command::Quit => Outcome::quit(),
            Command::Help => Outcome::show(self.help_text()),
            Command::Enter => self.handle_enter(),
            Command::List => self.handle_list(),
            Command::Buy(n) => self.handle_buy(n),
            Command::ViewCart => self.handle_view_cart(),
            Command::Back => self.handle_back(),
            Command::Checkout => self.handle_checkout(),
            Command::Confirm => self.handle_confirm(),
            Command::Cancel => self.handle_cancel(),
        }
    }

    // -------------------------------------------------------------------------
    // Per-command handlers
    // -------------------------------------------------------------------------

    fn handle_enter(&mut self) -> Outcome {
        match self.flow.transition_to(Screen::Browsing) {
            Ok(_) => Outcome::show(format!("Available Books\n{}", self.render_catalog())),
            Err(err) => self.rejection(err),
        }
    }

    fn handle_list(&self) -> Outcome {
        match self.flow.screen() {
            Screen::Browsing => Outcome::show(self.render_catalog()),
            Screen::Welcome | Screen::Confirmed => {
                Outcome::show("Enter the store first. Type 'enter'.")
            }
            _ => Outcome::show(self.help_text()),
        }
    }

    fn handle_buy(&mut self, n: usize) -> Outcome {
        if self.flow.screen() != Screen::Browsing {
            return Outcome::show("Please browse the store before buying. Type 'enter'.");
        }

        // The catalog never shrinks, so listing positions are stable ids
        // for the session. Resolve 1-based display index to a book id.
        let books = self.catalog.books();
        let Some(book) = n.checked_sub(1).and_then(|i| books.get(i)) else {
            return Outcome::show("Please select a book first! Type 'list' to see the catalog.");
        };

        match self.catalog.purchase(&book.id) {
            Ok(item) => {
                let title = item.title.clone();
                self.user.cart_mut().add(item);
                Outcome::show(format!("{} has been added to your cart!", title))
            }
            Err(err) => self.rejection(err),
        }
    }

    fn handle_view_cart(&mut self) -> Outcome {
        match self.flow.transition_to(Screen::CartView) {
            Ok(_) => {
                if self.user.cart().is_empty() {
                    Outcome::show("Your cart is currently empty.")
                } else {
                    Outcome::show(format!("Your Selected Books\n{}", self.render_cart()))
                }
            }
            Err(err) => self.rejection(err),
        }
    }

    fn handle_back(&mut self) -> Outcome {
        match self.flow.transition_to(Screen::Browsing) {
            Ok(_) => Outcome::show(self.render_catalog()),
            Err(err) => self.rejection(err),
        }
    }

    fn handle_checkout(&mut self) -> Outcome {
        // The empty-cart rule lives here, not in the core's clear().
        if self.user.cart().is_empty() {
            return Outcome::show("Your cart is empty. Add some books first!");
        }

        match self.flow.transition_to(Screen::Checkout) {
            Ok(_) => Outcome::show(format!(
                "Order Summary\n{}\nType 'confirm' to purchase or 'cancel' to go back.",
                self.render_cart()
            )),
            Err(err) => self.rejection(err),
        }
    }

    fn handle_confirm(&mut self) -> Outcome {
        if self.flow.screen() != Screen::Checkout {
            return Outcome::show("Nothing to confirm. Type 'checkout' first.");
        }

        let receipt = match Receipt::from_cart(
            self.user.cart(),
            self.config.store_name.clone(),
            self.user.name(),
        ) {
            Ok(receipt) => receipt,
            Err(err) => return self.rejection(err),
        };

        self.user.cart_mut().clear();
        // Checkout gating makes this transition always legal here.
        if let Err(err) = self.flow.transition_to(Screen::Confirmed) {
            return self.rejection(err);
        }

        // Session audit line; the receipt itself is not persisted.
        if let Ok(json) = serde_json::to_string(&receipt) {
            info!(user = %self.user.name(), receipt = %json, "checkout confirmed");
        }

        Outcome::show(format!(
            "Thank You\nYour purchase has been completed successfully!\n{}\nType 'enter' to continue shopping or 'quit' to leave.",
            self.render_receipt(&receipt)
        ))
    }

    fn handle_cancel(&mut self) -> Outcome {
        if self.flow.screen() != Screen::Checkout {
            return Outcome::show("Nothing to cancel.");
        }
        // Cancel leaves the cart untouched.
        match self.flow.transition_to(Screen::Browsing) {
            Ok(_) => Outcome::show("Checkout cancelled. Your cart is unchanged."),
            Err(err) => self.rejection(err),
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Dialog text for a recoverable core error.
    fn rejection(&self, err: CoreError) -> Outcome {
        let message = match err {
            CoreError::OutOfStock { title } => {
                format!("Sorry, {} is out of stock!", title)
            }
            CoreError::EmptyCart => "Your cart is empty. Add some books first!".to_string(),
            CoreError::InvalidTransition { .. } => {
                format!("You can't do that here. {}", self.help_text())
            }
            other => other.to_string(),
        };
        Outcome::show(message)
    }

    fn render_catalog(&self) -> String {
        let mut lines = Vec::new();
        for (i, book) in self.catalog.books().iter().enumerate() {
            let availability = if book.in_stock() {
                format!("{} in stock", book.stock)
            } else {
                "out of stock".to_string()
            };
            lines.push(format!(
                "{:>3}. {} by {} - {} ({})",
                i + 1,
                book.title,
                book.author,
                self.config.format_currency(book.price_paise),
                availability
            ));
        }
        lines.join("\n")
    }

    fn render_cart(&self) -> String {
        let cart = self.user.cart();
        let mut lines = Vec::new();
        for item in cart.items() {
            lines.push(format!(
                "  {} by {} - {}",
                item.title,
                item.author,
                self.config.format_currency(item.unit_price_paise)
            ));
        }
        lines.push(format!(
            "Total: {}",
            self.config.format_currency(cart.total().paise())
        ));
        lines.join("\n")
    }

    fn render_receipt(&self, receipt: &Receipt) -> String {
        let mut lines = vec![
            format!("--- {} receipt ---", receipt.store_name),
            format!("Customer: {}", receipt.user_name),
        ];
        for item in &receipt.lines {
            lines.push(format!(
                "  {} by {} - {}",
                item.title,
                item.author,
                self.config.format_currency(item.unit_price_paise)
            ));
        }
        lines.push(format!(
            "Total: {}",
            self.config.format_currency(receipt.total_paise)
        ));
        lines.join("\n")
    }

    /// Commands available on the current screen.
    fn help_text(&self) -> String {
        let commands = match self.flow.screen() {
            Screen::Welcome => "Commands: enter, quit",
            Screen::Browsing => "Commands: list, buy <n>, cart, checkout, quit",
            Screen::CartView => "Commands: back, checkout, quit",
            Screen::Checkout => "Commands: confirm, cancel, quit",
            Screen::Confirmed => "Commands: enter, quit",
        };
        commands.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_catalog;
    use readnest_core::Money;

    fn test_shell() -> Shell {
        let catalog = SharedCatalog::new(seed_catalog().unwrap());
        let user = User::new("Guest").unwrap();
        Shell::new(catalog, user, StoreConfig::default())
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("enter"), Some(Command::Enter));
        assert_eq!(Command::parse("  BUY 3 "), Some(Command::Buy(3)));
        assert_eq!(Command::parse("add 12"), Some(Command::Buy(12)));
        assert_eq!(Command::parse("cart"), Some(Command::ViewCart));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));

        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("buy"), None);
        assert_eq!(Command::parse("buy three"), None);
        assert_eq!(Command::parse("buy 3 now"), None);
        assert_eq!(Command::parse("purchase 3"), None);
    }

    #[test]
    fn test_buy_requires_browsing_screen() {
        let mut shell = test_shell();
        let outcome = shell.dispatch(Command::Buy(1));
        assert!(outcome.message.contains("enter"));
        assert!(shell.user.cart().is_empty());
    }

    #[test]
    fn test_buy_adds_to_cart() {
        let mut shell = test_shell();
        shell.dispatch(Command::Enter);

        // Seed position 3 is Clean Code.
        let outcome = shell.dispatch(Command::Buy(3));
        assert_eq!(outcome.message, "Clean Code has been added to your cart!");
        assert_eq!(shell.user.cart().item_count(), 1);
        assert_eq!(shell.user.cart().total(), Money::from_rupees(599, 0));
    }

    #[test]
    fn test_buy_until_out_of_stock() {
        let mut shell = test_shell();
        shell.dispatch(Command::Enter);

        // Clean Code has 2 copies.
        shell.dispatch(Command::Buy(3));
        shell.dispatch(Command::Buy(3));
        let outcome = shell.dispatch(Command::Buy(3));

        assert_eq!(outcome.message, "Sorry, Clean Code is out of stock!");
        assert_eq!(shell.user.cart().item_count(), 2);
    }

    #[test]
    fn test_buy_out_of_range_index() {
        let mut shell = test_shell();
        shell.dispatch(Command::Enter);

        let outcome = shell.dispatch(Command::Buy(999));
        assert!(outcome.message.contains("select a book"));
        let outcome = shell.dispatch(Command::Buy(0));
        assert!(outcome.message.contains("select a book"));
    }

    #[test]
    fn test_checkout_rejected_on_empty_cart() {
        let mut shell = test_shell();
        shell.dispatch(Command::Enter);

        let outcome = shell.dispatch(Command::Checkout);
        assert_eq!(outcome.message, "Your cart is empty. Add some books first!");
        assert_eq!(shell.flow.screen(), Screen::Browsing);
    }

    #[test]
    fn test_confirm_clears_cart_and_prints_receipt() {
        let mut shell = test_shell();
        shell.dispatch(Command::Enter);
        shell.dispatch(Command::Buy(3));
        shell.dispatch(Command::Buy(3));
        shell.dispatch(Command::Checkout);

        let outcome = shell.dispatch(Command::Confirm);
        assert!(outcome
            .message
            .contains("Your purchase has been completed successfully!"));
        assert!(outcome.message.contains("Total: ₹1198.00"));
        assert!(outcome.message.contains("--- ReadNest receipt ---"));
        assert!(outcome.message.contains("Customer: Guest"));
        assert!(shell.user.cart().is_empty());
        assert_eq!(shell.flow.screen(), Screen::Confirmed);
    }

    #[test]
    fn test_cancel_keeps_cart() {
        let mut shell = test_shell();
        shell.dispatch(Command::Enter);
        shell.dispatch(Command::Buy(1));
        shell.dispatch(Command::Checkout);

        let outcome = shell.dispatch(Command::Cancel);
        assert!(outcome.message.contains("unchanged"));
        assert_eq!(shell.user.cart().item_count(), 1);
        assert_eq!(shell.flow.screen(), Screen::Browsing);
    }

    #[test]
    fn test_run_loop_over_scripted_session() {
        let mut shell = test_shell();
        let script = "enter\nbuy 3\ncart\nback\ncheckout\nconfirm\nquit\n";
        let mut out = Vec::new();

        shell.run(script.as_bytes(), &mut out).unwrap();

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Welcome to ReadNest"));
        assert!(transcript.contains("Clean Code has been added to your cart!"));
        assert!(transcript.contains("Your purchase has been completed successfully!"));
        assert!(transcript.contains("Goodbye!"));
    }
}
