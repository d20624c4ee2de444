//! # Catalog Seed Data
//!
//! The hard-coded ReadNest catalog, loaded once at startup. All state is
//! in-memory and discarded at process exit; there is no persistence layer
//! to reload from.

use readnest_core::{Book, Catalog, CoreResult, Money};
use tracing::info;

/// Builds the fully stocked startup catalog.
pub fn seed_catalog() -> CoreResult<Catalog> {
    let mut catalog = Catalog::new();

    let titles: &[(&str, &str, i64, i64)] = &[
        // Programming
        ("Java Basics", "James Gosling", 499, 5),
        ("Effective Java", "Joshua Bloch", 799, 3),
        ("Clean Code", "Robert C. Martin", 599, 2),
        ("Head First Java", "Kathy Sierra", 699, 4),
        ("Thinking in Java", "Bruce Eckel", 899, 3),
        ("Java Concurrency in Practice", "Brian Goetz", 999, 2),
        ("Spring in Action", "Craig Walls", 849, 3),
        ("Data Structures & Algorithms in Java", "Robert Lafore", 750, 4),
        ("Python Crash Course", "Eric Matthes", 649, 6),
        ("Fluent Python", "Luciano Ramalho", 899, 3),
        ("JavaScript: The Good Parts", "Douglas Crockford", 549, 5),
        ("Eloquent JavaScript", "Marijn Haverbeke", 699, 4),
        // Fiction
        ("The Alchemist", "Paulo Coelho", 399, 8),
        ("1984", "George Orwell", 349, 7),
        ("To Kill a Mockingbird", "Harper Lee", 449, 5),
        ("The Great Gatsby", "F. Scott Fitzgerald", 399, 6),
        ("Pride and Prejudice", "Jane Austen", 349, 7),
        ("The Hobbit", "J.R.R. Tolkien", 499, 4),
        ("Harry Potter and the Sorcerer's Stone", "J.K. Rowling", 599, 9),
        ("The Lord of the Rings", "J.R.R. Tolkien", 899, 3),
        // Non-fiction
        ("Sapiens", "Yuval Noah Harari", 549, 6),
        ("Atomic Habits", "James Clear", 499, 7),
        ("The Psychology of Money", "Morgan Housel", 449, 5),
        ("Educated", "Tara Westover", 499, 4),
        ("Becoming", "Michelle Obama", 599, 5),
        ("The Subtle Art of Not Giving a F*ck", "Mark Manson", 449, 6),
        ("Thinking, Fast and Slow", "Daniel Kahneman", 649, 4),
        ("The 7 Habits of Highly Effective People", "Stephen Covey", 549, 5),
        // Business & finance
        ("Rich Dad Poor Dad", "Robert Kiyosaki", 499, 6),
        ("The Intelligent Investor", "Benjamin Graham", 699, 4),
        ("Zero to One", "Peter Thiel", 549, 5),
        ("Good to Great", "Jim Collins", 599, 4),
        ("The Lean Startup", "Eric Ries", 499, 5),
        ("The $100 Startup", "Chris Guillebeau", 449, 6),
        // Science & technology
        ("A Brief History of Time", "Stephen Hawking", 499, 5),
        ("Astrophysics for People in a Hurry", "Neil deGrasse Tyson", 449, 6),
        ("The Selfish Gene", "Richard Dawkins", 549, 4),
        ("Cosmos", "Carl Sagan", 599, 3),
        ("The Gene: An Intimate History", "Siddhartha Mukherjee", 649, 4),
        // Self-help & personal development
        ("The Power of Now", "Eckhart Tolle", 449, 7),
        ("The 5 AM Club", "Robin Sharma", 499, 5),
        ("The Four Agreements", "Don Miguel Ruiz", 399, 8),
        ("Man's Search for Meaning", "Viktor Frankl", 449, 6),
        ("The Art of Happiness", "Dalai Lama", 499, 5),
    ];

    for &(title, author, rupees, stock) in titles {
        catalog.add(Book::new(title, author, Money::from_rupees(rupees, 0), stock))?;
    }

    info!(books = catalog.len(), "catalog seeded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_loads_full_inventory() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.len(), 44);
        // Every seeded book starts purchasable.
        assert!(catalog.list().iter().all(|b| b.in_stock()));
    }

    #[test]
    fn test_seed_catalog_preserves_display_order() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.list()[0].title, "Java Basics");
        assert_eq!(catalog.list()[2].title, "Clean Code");
        assert_eq!(catalog.list()[2].price(), Money::from_rupees(599, 0));
        assert_eq!(catalog.list()[2].stock, 2);
    }
}
