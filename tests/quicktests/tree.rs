use ordtree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn traversal_is_strictly_ascending(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let values = tree.traverse();
    values.len() == tree.len() && values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let len = tree.len();
        let existed = tree.contains(delete);

        match tree.delete(delete) {
            Ok(_) if existed => assert_eq!(tree.len(), len - 1),
            Err(_) if !existed => assert_eq!(tree.len(), len),
            _ => return false,
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn min_is_first_in_order(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match tree.find_min() {
        Ok(node) => Some(node.value()) == xs.iter().min(),
        Err(_) => xs.is_empty(),
    }
}
