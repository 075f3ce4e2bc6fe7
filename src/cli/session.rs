//! Interactive register session
//!
//! The menu loop that feeds typed commands to the register. It holds no
//! business rules of its own; everything it prints comes from the register's
//! outcomes and errors.

use std::io::{BufRead, Write};

use chrono::Local;

use crate::display::{
    format_open_transaction, format_paid_receipt, format_product_list, format_receipt_header,
};
use crate::error::KassaResult;
use crate::services::{CommandOutcome, Register};

/// How a customer interaction ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CustomerEnd {
    /// Pay was issued; back to the main menu
    Finished,
    /// Input ended mid-transaction
    InputClosed,
}

/// Run the main menu until the operator quits or input ends
///
/// The receipt counter is saved on the way out.
pub fn run_session<R, W>(
    register: &mut Register,
    currency_suffix: &str,
    mut input: R,
    mut output: W,
) -> KassaResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "Welcome to the register!")?;
        writeln!(output, "1. New customer")?;
        writeln!(output, "0. Quit")?;
        write!(output, "Choose an option (1/0): ")?;
        output.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match choice.trim() {
            "1" => {
                if serve_customer(register, currency_suffix, &mut input, &mut output)?
                    == CustomerEnd::InputClosed
                {
                    break;
                }
            }
            "0" => break,
            _ => writeln!(output, "Invalid input. Try again.")?,
        }
    }

    // Already logged by the sequencer
    let _ = register.shutdown();
    writeln!(output, "Goodbye!")?;
    Ok(())
}

fn serve_customer<R, W>(
    register: &mut Register,
    currency_suffix: &str,
    input: &mut R,
    output: &mut W,
) -> KassaResult<CustomerEnd>
where
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    write!(output, "{}", format_receipt_header(&Local::now()))?;
    writeln!(output, "Products:")?;
    write!(
        output,
        "{}",
        format_product_list(register.catalog().products(), currency_suffix)
    )?;

    loop {
        writeln!(output, "Commands:")?;
        writeln!(output, "  <productid> <quantity>")?;
        writeln!(output, "  pay")?;
        write!(output, "Command: ")?;
        output.flush()?;

        let Some(command) = read_line(input)? else {
            return Ok(CustomerEnd::InputClosed);
        };

        match register.interpret(&command) {
            Ok(CommandOutcome::Added(item)) => {
                writeln!(
                    output,
                    "Added to receipt: {}",
                    item.format_with_suffix(currency_suffix)
                )?;
                write!(
                    output,
                    "{}",
                    format_open_transaction(register.transaction(), currency_suffix)
                )?;
            }
            Ok(CommandOutcome::Paid(receipt)) => {
                write!(output, "{}", format_paid_receipt(&receipt, currency_suffix))?;
                writeln!(output, "Receipt saved to file: {}", receipt.path.display())?;
                writeln!(output, "Payment complete. Thank you!")?;
                writeln!(output)?;
                return Ok(CustomerEnd::Finished);
            }
            Ok(CommandOutcome::NothingToSave) => {
                writeln!(output, "{}", CommandOutcome::NothingToSave)?;
                writeln!(output)?;
                return Ok(CustomerEnd::Finished);
            }
            Err(e) => writeln!(output, "{}. Try again.", e)?,
        }
    }
}

/// Read one line without its terminator; None at end of input
fn read_line<R: BufRead>(input: &mut R) -> KassaResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
