// ABOUTME: User-facing notifications for dashboard actions
// ABOUTME: Console output for the CLI and an in-memory recorder for embedding and tests

use colored::*;
use std::io::{self, Write};

pub const PRODUCT_ADDED: &str = "Product added successfully!";
pub const FEEDBACK_SUBMITTED: &str = "Feedback submitted successfully!";
pub const REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const DELIVERY_ADDED: &str = "Delivery schedule added successfully!";
pub const DELIVERY_UPDATED: &str = "Delivery schedule updated successfully!";
pub const DELIVERY_DELETED: &str = "Delivery schedule deleted";

/// Receives toast-style messages after an action completes
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Prints notifications to stderr, leaving stdout to tables and JSON
#[derive(Debug)]
pub struct ConsoleNotifier<W = io::Stderr> {
    writer: W,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        ConsoleNotifier {
            writer: io::stderr(),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn with_writer(writer: W) -> Self {
        ConsoleNotifier { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn success(&mut self, message: &str) {
        // A closed terminal is not worth failing the action over
        let _ = writeln!(self.writer, "{} {}", "✓".green().bold(), message.green());
    }

    fn error(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{} {}", "✗".red().bold(), message.red());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Keeps every notification in order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.notifications
            .push(Notification::Success(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.notifications.push(Notification::Error(message.to_string()));
    }
}
