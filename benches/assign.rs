use bnode::{add_left, add_left_value, add_right, add_right_value, assign, clear, copy, Link};
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

// Complete tree of the given depth, values numbered in pre-order from `start`.
fn complete(depth: usize, start: u64) -> Link<u64> {
    if depth == 0 {
        return Link::empty();
    }
    let mut tree = Link::new(start);
    let left = complete(depth - 1, start + 1);
    let right = complete(depth - 1, start + (1 << (depth - 1)));
    if let Some(node) = tree.get_mut() {
        let _ = add_left(node, left);
        let _ = add_right(node, right);
    }
    tree
}

// A spine leaning left with a single right leaf under the root.
fn spine(depth: usize) -> Link<u64> {
    let mut tree = Link::new(0);
    let mut tip = tree.get_mut().expect("just allocated");
    let _ = add_right_value(tip, 1);
    for i in 0..depth {
        let _ = add_left_value(tip, i as u64 + 2);
        tip = tip.left_mut().expect("just attached");
    }
    tree
}

fn setup_same_shape(depth: usize) -> (Link<u64>, Link<u64>) {
    (complete(depth, 1_000), complete(depth, 0))
}

fn setup_different_shape(depth: usize) -> (Link<u64>, Link<u64>) {
    (spine(1 << depth.min(8)), complete(depth, 0))
}

#[library_benchmark]
#[bench::same_shape_8(setup_same_shape(8))]
#[bench::same_shape_12(setup_same_shape(12))]
#[bench::different_shape_8(setup_different_shape(8))]
fn assign_in_place((mut dest, source): (Link<u64>, Link<u64>)) -> Link<u64> {
    assign(&mut dest, black_box(source.get()));
    dest
}

#[library_benchmark]
#[bench::same_shape_8(setup_same_shape(8))]
#[bench::same_shape_12(setup_same_shape(12))]
#[bench::different_shape_8(setup_different_shape(8))]
fn clear_then_copy((mut dest, source): (Link<u64>, Link<u64>)) -> Link<u64> {
    clear(&mut dest);
    dest = copy(black_box(source.get()));
    dest
}

library_benchmark_group!(
    name = assign_group;
    benchmarks = assign_in_place, clear_then_copy
);

main!(library_benchmark_groups = assign_group);
