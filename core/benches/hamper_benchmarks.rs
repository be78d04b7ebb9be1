use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hamper::{Cart, ProductSnapshot};
use uuid::Uuid;

// --- Common Benchmark Fixtures ---

fn bench_product(n: u32) -> ProductSnapshot {
  ProductSnapshot {
    id: Uuid::new_v4(),
    name: format!("product-{n}"),
    description: None,
    price_cents: 100 + i64::from(n),
    image: None,
    category: Some("bench".to_string()),
    stock_quantity: 1000,
  }
}

fn filled_cart(lines: u32) -> Cart {
  let cart = Cart::in_memory();
  for n in 0..lines {
    cart.add(&bench_product(n), 1 + n % 4);
  }
  cart
}

// --- Benchmarks ---

fn bench_add_cycle(c: &mut Criterion) {
  let mut group = c.benchmark_group("cart_add_cycle");
  for lines in [1u32, 10, 50] {
    group.throughput(Throughput::Elements(1));
    group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
      // Each add is a full read-modify-write-notify cycle over `lines`
      // pre-existing lines.
      let cart = filled_cart(lines);
      let product = bench_product(u32::MAX);
      cart.add(&product, 1);
      b.iter(|| {
        cart.add(&product, 1);
      });
    });
  }
  group.finish();
}

fn bench_total_and_count(c: &mut Criterion) {
  let mut group = c.benchmark_group("cart_derived_queries");
  for lines in [10u32, 100] {
    group.bench_with_input(BenchmarkId::new("total_cents", lines), &lines, |b, &lines| {
      let cart = filled_cart(lines);
      b.iter(|| cart.total_cents());
    });
    group.bench_with_input(BenchmarkId::new("count", lines), &lines, |b, &lines| {
      let cart = filled_cart(lines);
      b.iter(|| cart.count());
    });
  }
  group.finish();
}

fn bench_notify_fanout(c: &mut Criterion) {
  let mut group = c.benchmark_group("view_fanout");
  for views in [1usize, 8, 32] {
    group.bench_with_input(BenchmarkId::from_parameter(views), &views, |b, &views| {
      let cart = filled_cart(5);
      let _views: Vec<_> = (0..views).map(|_| cart.view()).collect();
      let product = bench_product(u32::MAX - 1);
      // One mutation re-reads the store once per live view.
      b.iter(|| {
        cart.add(&product, 1);
      });
    });
  }
  group.finish();
}

criterion_group!(benches, bench_add_cycle, bench_total_and_count, bench_notify_fanout);
criterion_main!(benches);
