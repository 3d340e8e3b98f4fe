// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use std::sync::Arc;
use student_calc::prelude::*;

fn main() {
    println!("=== Calculator ===\n");

    let a: Decimal = "10".parse().unwrap();
    let b: Decimal = "3".parse().unwrap();

    for op in Operation::ALL {
        match Calculation::compute(a, Some(b), op) {
            Ok(calc) => println!("  {}", calc),
            Err(e) => println!("  {} failed: {}", op, e),
        }
    }

    println!("\nError cases:");
    for (a, b, op) in [
        (Decimal::ONE, Some(Decimal::ZERO), Operation::Div),
        (Decimal::NEGATIVE_ONE, None, Operation::Sqrt),
        (Decimal::ONE, None, Operation::Add),
    ] {
        if let Err(e) = evaluate(a, b, op) {
            println!("  {} -> {}", op, e);
        }
    }

    println!("\n=== Student Store ===\n");

    let store = StudentStore::with_event_handler(Arc::new(LoggingEventHandler));
    for (name, age, grade) in [("Alice", 20, "A"), ("Bob", 21, "B"), ("Carol", 19, "A")] {
        let student = store.create(NewStudent::new(name, age, grade));
        println!("  created {} -> id {}", student.name, student.id);
    }

    store
        .update(StudentId::new(2), NewStudent::new("Robert", 22, "A"))
        .unwrap();
    store.delete(StudentId::new(1)).unwrap();

    println!("\nRemaining:");
    for student in store.list() {
        println!(
            "  #{} {} (age {}, grade {})",
            student.id, student.name, student.age, student.grade
        );
    }

    match store.get(StudentId::new(1)) {
        Ok(_) => println!("\nunexpected: student 1 still present"),
        Err(e) => println!("\nLookup of id 1: {}", e),
    }
}
