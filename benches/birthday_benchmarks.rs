//! Performance benchmarks for the upcoming-birthday query.
//!
//! Measures the full query (year projection, window filter, weekend
//! shift) over address books of increasing size.

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rolodex::{AddressBook, Record};

/// Build a book of `size` contacts with birthdays spread across the year.
fn populated_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact{}", i)).unwrap();
        record.add_phone(&format!("{:010}", i)).unwrap();
        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .set_birthday(&format!("{:02}.{:02}.1990", day, month))
            .unwrap();
        book.add_record(record);
    }
    book
}

fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 11, 10).unwrap();

    let mut group = c.benchmark_group("upcoming_birthdays");
    for size in [100usize, 1_000, 10_000] {
        let book = populated_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays(today));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_upcoming_birthdays);
criterion_main!(benches);
