//! Explicit game trees for exercising the search engines in tests.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Game, Move, Player};
use crate::search::Valuation;

#[derive(Debug)]
pub enum Tree {
    Leaf(f64),
    Node(Vec<Tree>),
}

impl Tree {
    /// random tree where every inner node has 1..=max_branching children and leaves hold small integers
    pub fn random(seed: u64, depth: u32, max_branching: usize) -> Tree {
        let mut rng = StdRng::seed_from_u64(seed);
        Tree::random_with(&mut rng, depth, max_branching)
    }

    /// complete tree of the given depth and branching factor with all leaves set to `value`
    pub fn uniform(depth: u32, branching: usize, value: f64) -> Tree {
        if depth == 0 {
            return Tree::Leaf(value);
        }

        Tree::Node((0..branching).map(|_| Tree::uniform(depth - 1, branching, value)).collect())
    }

    fn random_with(rng: &mut StdRng, depth: u32, max_branching: usize) -> Tree {
        if depth == 0 {
            return Tree::Leaf(rng.gen_range(-10..=10) as f64);
        }

        let branching = rng.gen_range(1..=max_branching);
        Tree::Node((0..branching).map(|_| Tree::random_with(rng, depth - 1, max_branching)).collect())
    }
}

/// Position inside a `Tree`; moves are child indices in the row coordinate.
#[derive(Debug, Clone)]
pub struct TreeGame {
    root: Rc<Tree>,
    path: Vec<u8>,
    active: Player,
}

impl TreeGame {
    pub fn new(tree: Tree) -> Self {
        TreeGame {
            root: Rc::new(tree),
            path: Vec::new(),
            active: Player::One,
        }
    }

    pub fn path(&self) -> &[u8] {
        &self.path
    }

    pub fn node(&self) -> &Tree {
        let mut node: &Tree = &self.root;

        for &child in &self.path {
            node = match node {
                Tree::Node(children) => &children[child as usize],
                Tree::Leaf(_) => panic!("Path leads through a leaf"),
            };
        }

        node
    }
}

impl Game for TreeGame {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, _player: Player) -> Vec<Move> {
        match self.node() {
            Tree::Leaf(_) => Vec::new(),
            Tree::Node(children) => (0..children.len()).map(|i| Move::new(i as u8, 0)).collect(),
        }
    }

    fn forecast_move(&self, move_: Move) -> Self {
        let mut next = self.clone();
        next.path.push(move_.row() as u8);
        next.active = !self.active;
        next
    }

    fn is_winner(&self, _player: Player) -> bool {
        false
    }

    fn is_loser(&self, _player: Player) -> bool {
        false
    }
}

/// leaf values are from the point of view of the root player; cut-off inner nodes score zero
pub fn leaf_value(game: &TreeGame, _player: Player) -> Valuation {
    match game.node() {
        Tree::Leaf(value) => Valuation::new(*value),
        Tree::Node(_) => Valuation::ZERO,
    }
}

/// exact minimax value of the whole tree, maximising at even plies
pub fn brute_force_value(tree: &Tree, maximising: bool) -> f64 {
    match tree {
        Tree::Leaf(value) => *value,
        Tree::Node(children) => {
            let values = children.iter().map(|child| brute_force_value(child, !maximising));

            if maximising {
                values.fold(f64::NEG_INFINITY, f64::max)
            } else {
                values.fold(f64::INFINITY, f64::min)
            }
        }
    }
}
