//! Register service
//!
//! Interprets register commands and drives one customer at a time through
//! the transaction lifecycle:
//!
//! ```text
//! Open ──add──► Open ──pay──► Finalizing ──receipt saved──► Open (empty)
//!                                  │
//!                                  └──write failed──► Open (items kept)
//! ```

use std::fmt;
use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::config::{KassaPaths, Settings};
use crate::error::{KassaError, KassaResult};
use crate::models::{Catalog, LineItem, Money, ProductId, Transaction};
use crate::storage::{load_catalog, FinalizeOutcome, ReceiptSequencer, ReceiptWriter, SkippedLine};

/// A parsed register command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add `quantity` of a product to the open transaction
    Add { product_id: ProductId, quantity: u32 },
    /// Finish the transaction and save the receipt
    Pay,
}

impl Command {
    /// Parse `pay` (any case) or `<productId> <quantity>`
    pub fn parse(raw: &str) -> KassaResult<Self> {
        let raw = raw.trim();
        let invalid = || {
            KassaError::MalformedInput(format!(
                "'{}' is not a command. Use '<productId> <quantity>' or 'pay'",
                raw
            ))
        };

        if raw.eq_ignore_ascii_case("pay") {
            return Ok(Self::Pay);
        }

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let [product_id, quantity] = tokens[..] else {
            return Err(invalid());
        };

        let product_id: ProductId = product_id.parse().map_err(|_| invalid())?;
        let quantity: i64 = quantity.parse().map_err(|_| invalid())?;
        if quantity <= 0 {
            return Err(KassaError::MalformedInput(
                "Quantity must be greater than zero".into(),
            ));
        }
        let quantity = u32::try_from(quantity).map_err(|_| invalid())?;

        Ok(Self::Add {
            product_id,
            quantity,
        })
    }
}

/// A receipt produced by a successful checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidReceipt {
    pub number: u64,
    pub path: PathBuf,
    pub items: Vec<LineItem>,
    pub total: Money,
}

/// Result of a successfully interpreted command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A line was appended to the open transaction
    Added(LineItem),
    /// The transaction was saved and the register is ready for the next customer
    Paid(PaidReceipt),
    /// Pay was issued on an empty transaction
    NothingToSave,
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(item) => write!(f, "Added to receipt: {}", item),
            Self::Paid(receipt) => write!(f, "Receipt saved to file: {}", receipt.path.display()),
            Self::NothingToSave => write!(f, "No receipt to save."),
        }
    }
}

/// The point-of-sale register: catalog, open transaction and receipt output
pub struct Register {
    catalog: Catalog,
    transaction: Transaction,
    sequencer: ReceiptSequencer,
    writer: ReceiptWriter,
    persist_sequence_on_checkout: bool,
}

impl Register {
    /// Assemble a register from its parts
    pub fn new(
        catalog: Catalog,
        sequencer: ReceiptSequencer,
        writer: ReceiptWriter,
        persist_sequence_on_checkout: bool,
    ) -> Self {
        Self {
            catalog,
            transaction: Transaction::new(),
            sequencer,
            writer,
            persist_sequence_on_checkout,
        }
    }

    /// Load catalog and receipt counter from the configured paths
    ///
    /// Never fails: missing or broken files fall back to defaults. The skipped
    /// product lines are returned for optional reporting.
    pub fn open(paths: &KassaPaths, settings: &Settings) -> (Self, Vec<SkippedLine>) {
        let (catalog, skipped) =
            load_catalog(paths.products_file(), settings.include_seed_products);
        let sequencer = ReceiptSequencer::load(paths.receipt_number_file());
        let writer = ReceiptWriter::new(
            paths.receipts_dir(),
            settings.receipt_prefix.clone(),
            settings.currency_suffix.clone(),
        );

        info!(
            products = catalog.len(),
            next_receipt = sequencer.current(),
            receipts_dir = %writer.receipts_dir().display(),
            "Register opened"
        );

        let register = Self::new(
            catalog,
            sequencer,
            writer,
            settings.persist_sequence_on_checkout,
        );
        (register, skipped)
    }

    /// Parse and execute one command
    pub fn interpret(&mut self, raw: &str) -> KassaResult<CommandOutcome> {
        match Command::parse(raw)? {
            Command::Add {
                product_id,
                quantity,
            } => self.add_line(product_id, quantity).map(CommandOutcome::Added),
            Command::Pay => self.pay(),
        }
    }

    /// Append a priced line for `product_id` to the open transaction
    pub fn add_line(&mut self, product_id: ProductId, quantity: u32) -> KassaResult<LineItem> {
        let item = self
            .transaction
            .add_line(&self.catalog, product_id, quantity)?
            .clone();

        debug!(product_id = %item.product_id, quantity, total = %item.total, "Line added");
        Ok(item)
    }

    /// Finish the open transaction
    ///
    /// On success the receipt number advances and the transaction is cleared.
    /// If the receipt cannot be written the transaction stays open unchanged.
    pub fn pay(&mut self) -> KassaResult<CommandOutcome> {
        let number = self.sequencer.current();

        let path = match self
            .writer
            .finalize(&self.transaction, number, Local::now())?
        {
            FinalizeOutcome::NothingToSave => return Ok(CommandOutcome::NothingToSave),
            FinalizeOutcome::Saved(path) => path,
        };

        self.sequencer.next();
        if self.persist_sequence_on_checkout {
            // Failure is logged by the sequencer; the shutdown save retries
            let _ = self.sequencer.save();
        }

        let receipt = PaidReceipt {
            number,
            path,
            items: self.transaction.items().to_vec(),
            total: self.transaction.total(),
        };
        self.transaction.clear();

        Ok(CommandOutcome::Paid(receipt))
    }

    /// Persist the receipt counter before the process exits
    pub fn shutdown(&self) -> KassaResult<()> {
        if !self.transaction.is_empty() {
            warn!(
                items = self.transaction.len(),
                "Discarding unpaid transaction at shutdown"
            );
        }
        self.sequencer.save()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// The number the next receipt will receive
    pub fn next_receipt_number(&self) -> u64 {
        self.sequencer.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn register_in(temp_dir: &TempDir) -> Register {
        let paths = KassaPaths::with_base_dir(temp_dir.path().to_path_buf());
        Register::open(&paths, &Settings::default()).0
    }

    fn receipt_files(temp_dir: &TempDir) -> usize {
        std::fs::read_dir(temp_dir.path().join("Receipts"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("pay").unwrap(), Command::Pay);
        assert_eq!(Command::parse("  PaY ").unwrap(), Command::Pay);
        assert_eq!(
            Command::parse("300 2").unwrap(),
            Command::Add {
                product_id: ProductId::new(300),
                quantity: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for raw in ["", "300", "300 2 3", "abc 2", "300 two", "pay now", "300 1.5"] {
            let err = Command::parse(raw).unwrap_err();
            assert!(err.is_malformed_input(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_parse_rejects_non_positive_quantity() {
        assert!(Command::parse("300 0").unwrap_err().is_malformed_input());
        assert!(Command::parse("300 -2").unwrap_err().is_malformed_input());
    }

    #[test]
    fn test_add_and_pay_with_seed_products() {
        let temp_dir = TempDir::new().unwrap();
        let mut register = register_in(&temp_dir);

        let CommandOutcome::Added(bananas) = register.interpret("300 2").unwrap() else {
            panic!("expected an added line");
        };
        assert_eq!(bananas.total, Money::from_cents(2500));
        assert_eq!(bananas.pricing_mode.label(), "kilo");

        let CommandOutcome::Added(coffee) = register.interpret("301 1").unwrap() else {
            panic!("expected an added line");
        };
        assert_eq!(coffee.total, Money::from_cents(3550));
        assert_eq!(coffee.pricing_mode.label(), "st");

        let CommandOutcome::Paid(receipt) = register.interpret("pay").unwrap() else {
            panic!("expected a paid receipt");
        };
        assert_eq!(receipt.number, 1);
        assert_eq!(receipt.total, Money::from_cents(6050));
        assert!(register.transaction().is_empty());

        let contents = std::fs::read_to_string(&receipt.path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("-------------------- "));
        assert_eq!(lines[1], "300 2 kilo - 25.00 kr");
        assert_eq!(lines[2], "301 1 st - 35.50 kr");
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut register = register_in(&temp_dir);
        register.interpret("300 1").unwrap();

        let err = register.interpret("999 1").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product not found: 999");
        assert_eq!(register.transaction().len(), 1);
    }

    #[test]
    fn test_malformed_command_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut register = register_in(&temp_dir);
        register.interpret("301 1").unwrap();

        assert!(register.interpret("hello").is_err());
        assert!(register.interpret("301 0").is_err());
        assert_eq!(register.transaction().len(), 1);
    }

    #[test]
    fn test_pay_on_empty_transaction_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut register = register_in(&temp_dir);

        for _ in 0..3 {
            assert_eq!(register.interpret("pay").unwrap(), CommandOutcome::NothingToSave);
        }
        assert_eq!(receipt_files(&temp_dir), 0);
        assert_eq!(register.next_receipt_number(), 1);
        assert!(!temp_dir.path().join("receipt_number.txt").exists());
    }

    #[test]
    fn test_each_checkout_gets_its_own_receipt() {
        let temp_dir = TempDir::new().unwrap();
        let mut register = register_in(&temp_dir);

        register.interpret("300 1").unwrap();
        register.interpret("pay").unwrap();
        register.interpret("301 1").unwrap();
        register.interpret("pay").unwrap();

        assert_eq!(receipt_files(&temp_dir), 2);
        assert_eq!(register.next_receipt_number(), 3);
    }

    #[test]
    fn test_counter_persisted_after_checkout() {
        let temp_dir = TempDir::new().unwrap();
        let mut register = register_in(&temp_dir);

        register.interpret("300 1").unwrap();
        register.interpret("pay").unwrap();

        let stored = std::fs::read_to_string(temp_dir.path().join("receipt_number.txt")).unwrap();
        assert_eq!(stored, "2");
    }

    #[test]
    fn test_counter_only_saved_at_shutdown_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KassaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            persist_sequence_on_checkout: false,
            ..Settings::default()
        };
        let counter = paths.receipt_number_file();

        let (mut register, _) = Register::open(&paths, &settings);
        register.interpret("300 1").unwrap();
        register.interpret("pay").unwrap();
        assert!(!counter.exists());

        register.shutdown().unwrap();
        assert_eq!(std::fs::read_to_string(&counter).unwrap(), "2");

        let (reopened, _) = Register::open(&paths, &settings);
        assert_eq!(reopened.next_receipt_number(), 2);
    }

    #[test]
    fn test_failed_receipt_write_keeps_transaction_open() {
        let temp_dir = TempDir::new().unwrap();
        // A file where the receipts directory should be
        std::fs::write(temp_dir.path().join("Receipts"), "").unwrap();
        let mut register = register_in(&temp_dir);

        register.interpret("300 2").unwrap();
        let err = register.interpret("pay").unwrap_err();

        assert!(matches!(err, KassaError::Persistence(_)));
        assert_eq!(register.transaction().len(), 1);
        assert_eq!(register.next_receipt_number(), 1);
    }

    #[test]
    fn test_external_products_available() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("products.txt"),
            "302 Milk 9.90 kilo\nabc Bad 1\n",
        )
        .unwrap();

        let paths = KassaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let (mut register, skipped) = Register::open(&paths, &Settings::default());

        assert_eq!(register.catalog().len(), 3);
        assert_eq!(skipped.len(), 1);

        let CommandOutcome::Added(item) = register.interpret("302 3").unwrap() else {
            panic!("expected an added line");
        };
        assert_eq!(item.to_string(), "302 3 kilo - 29.70 kr");
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(CommandOutcome::NothingToSave.to_string(), "No receipt to save.");
    }
}
