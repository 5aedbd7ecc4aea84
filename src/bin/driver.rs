//! Replays a scripted scenario against [`Tree`] and prints what each step
//! reports. Log verbosity is controlled with `RUST_LOG`.

use anyhow::{ensure, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use unbalanced_bst::{Direction, Tree, TreeError};

const NUMS: i32 = 4000;
const GAP: i32 = 37;

/// Rotates `value` in `tree`, logging instead of failing when the rotation can't happen.
fn try_rotate(tree: &mut Tree<i32>, value: i32, direction: Direction) {
    match tree.rotate(&value, direction) {
        Ok(()) => {}
        Err(TreeError::NotFound) => {
            println!("Value isn't in the binary search tree. Try again.");
        }
        Err(err) => warn!(value, %err, "rotation skipped"),
    }
}

/// Inserts a sweep of numbers, removes the odd ones, and checks what's left.
fn check_sweep() -> Result<Tree<i32>> {
    let mut t = Tree::new();

    println!("Checking... (no more output means success)");
    let mut i = GAP;
    while i != 0 {
        t.insert(i);
        i = (i + GAP) % NUMS;
    }
    for i in (1..NUMS).step_by(2) {
        t.remove(&i);
    }
    if NUMS < 40 {
        print!("{}", t.render_in_order());
    }

    ensure!(
        t.find_min()? == &2 && t.find_max()? == &(NUMS - 2),
        "FindMin or FindMax error!"
    );
    for i in (2..NUMS).step_by(2) {
        ensure!(t.contains(&i), "Find error1! {i} is missing");
    }
    for i in (1..NUMS).step_by(2) {
        ensure!(!t.contains(&i), "Find error2! {i} is still present");
    }
    Ok(t)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let t = check_sweep()?;
    info!(nodes = t.node_count(), height = t.height(), "sweep tree built");

    let mut w: Tree<i32> = (0..=40).collect();
    let full_tree: Tree<i32> = [25, 20, 30, 18, 22, 28, 33].into_iter().collect();

    println!("\nCalling nodeCount method");
    println!("Node Count of tree t: {}", t.node_count());
    println!("Node Count of w: {}", w.node_count());
    println!("Node Count of fullTree: {}", full_tree.node_count());

    println!("\nCalling isFull method");
    println!("The tree t is full(true or false): {}", t.is_full());
    println!("The tree w is full(true or false): {}", w.is_full());
    println!("The tree fullTree is full(true or false): {}", full_tree.is_full());

    let twin_of_w: Tree<i32> = (0..=40).collect();
    let l: Tree<i32> = (60..=100).collect();

    println!("\nCalling compareStructure method");
    println!("The structure of t and w are the same(true or false): {}", t.compare_structure(&w));
    println!(
        "The structure of w and twinOfW are the same(true or false): {}",
        w.compare_structure(&twin_of_w)
    );
    println!("The structure of w and l are the same(true or false): {}", w.compare_structure(&l));

    println!("\nCalling equals method");
    println!("Trees w and twinOfW are equal(true or false): {}", w.equals(&twin_of_w));
    println!("Trees w and l are equal(true or false): {}", w.equals(&l));
    println!("Trees w and t are equal(true or false): {}", w.equals(&t));

    let copy_of_w = w.copy();
    let copy_of_t = t.copy();
    println!("\nCalling copy method");
    println!(
        "The copy of w has the same structure as w(true or false): {}",
        w.compare_structure(&copy_of_w)
    );
    println!("The copy of w is equal to w(true or false): {}", w.equals(&copy_of_w));
    println!(
        "The copy of t has the same structure as t(true or false): {}",
        t.compare_structure(&copy_of_t)
    );
    println!("The copy of t is equal to t(true or false): {}", t.equals(&copy_of_t));

    println!("\nTesting with fullTree");
    println!("Original fullTree");
    print!("{full_tree}");
    let copy_of_full_tree = full_tree.copy();
    println!("Copy of fullTree");
    print!("{copy_of_full_tree}");

    println!("\nCalling mirror method");
    println!("Mirror of fullTree");
    let mirror_of_full_tree = full_tree.mirror();
    print!("{mirror_of_full_tree}");

    println!("\nCalling isMirror method");
    println!("Tree w is a mirror of fullTree(true or false): {}", full_tree.is_mirror(&w));
    println!(
        "Tree copyOfFullTree is a mirror of fullTree(true or false): {}",
        full_tree.is_mirror(&copy_of_full_tree)
    );
    println!(
        "Tree mirrorOfFullTree is a mirror of fullTree(true or false): {}",
        full_tree.is_mirror(&mirror_of_full_tree)
    );

    let mut test_rotate_right: Tree<i32> = [100, 150, 50, 70, 40, 45].into_iter().collect();
    let original_layout = test_rotate_right.render_levels();
    println!("\nPrinting the testRotateRight tree");
    print!("{original_layout}");

    println!("\nCalling the rotateRight method");
    try_rotate(&mut test_rotate_right, 75, Direction::Right);
    println!("Rotating 100 to the right");
    test_rotate_right.rotate_right(&100)?;
    print!("{test_rotate_right}");
    println!("Rotating 100 to the right");
    test_rotate_right.rotate_right(&100)?;
    print!("{test_rotate_right}");

    println!("\nCalling the rotateLeft method");
    try_rotate(&mut test_rotate_right, 75, Direction::Left);
    println!("Rotating 70 to the left");
    test_rotate_right.rotate_left(&70)?;
    print!("{test_rotate_right}");
    println!("Rotating 50 to the left");
    test_rotate_right.rotate_left(&50)?;
    print!("{test_rotate_right}");
    ensure!(
        test_rotate_right.render_levels() == original_layout,
        "rotations did not restore the original layout"
    );

    println!("\nCalling printLevels method");
    println!("Testing with fullTree");
    print!("{full_tree}");
    println!("Testing with w");
    print!("{w}");

    println!("\nRandom testing of binary search tree w");
    for i in 0..20 {
        try_rotate(&mut w, i, Direction::Left);
    }
    print!("{w}");
    for i in (6..=10).rev() {
        try_rotate(&mut w, i, Direction::Right);
    }
    print!("{w}");

    info!(nodes = w.node_count(), height = w.height(), "scenario finished");
    Ok(())
}
