// benches/parse.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use routine_scrape::engine::types::{Cell, Row, Table};
use routine_scrape::{parse, parse_html, specs};

/// EEE-shaped grid: 7 days x 3 slots, 12 trimesters, most cells filled.
fn wide_table() -> Table {
    let mut rows: Vec<Row> = (0..5).map(|i| vec![Cell::new(i.to_string())]).collect();

    let mut days = vec![Cell::new("6"), Cell::new("Trimester")];
    days.extend((1..=7).map(|d| Cell::spanning(format!("Day {d}"), 3)));
    rows.push(days);

    let mut slots = vec![Cell::new("7")];
    slots.extend((0..21).map(|i| Cell::new(format!("Time {}", i % 3 + 1))));
    rows.push(slots);

    for t in 0..12 {
        let mut r = vec![Cell::new(""), Cell::new(format!("{t}"))];
        if t == 0 {
            r.push(Cell::new("Trimester"));
        }
        r.extend((0..22).map(|i| Cell::new(if i % 4 == 3 { String::new() } else { format!("EEE {}{:02}", t + 1, i) })));
        rows.push(r);
    }
    Table::new(rows)
}

fn to_html(table: &Table) -> String {
    let mut doc = String::from(r#"<table class="waffle">"#);
    for row in &table.rows {
        doc.push_str("<tr>");
        for c in row {
            doc.push_str(&format!(r#"<td colspan="{}">{}</td>"#, c.span(), c.text));
        }
        doc.push_str("</tr>");
    }
    doc.push_str("</table>");
    doc
}

fn bench_parse(c: &mut Criterion) {
    let table = wide_table();
    let doc = to_html(&table);

    c.bench_function("eee_table", |b| {
        b.iter(|| {
            let recs = parse(&specs::eee::SPEC, black_box(&table)).unwrap();
            black_box(recs.len())
        })
    });

    c.bench_function("eee_html", |b| {
        b.iter(|| {
            let recs = parse_html(&specs::eee::SPEC, black_box(&doc)).unwrap();
            black_box(recs.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
