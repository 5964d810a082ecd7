//! Shape catalog tests through the facade crate.

use tuitris::core::pieces::{next_rotation_index, piece_for, random_piece};
use tuitris::core::{Randomizer, SimpleRng};
use tuitris::types::{Color, PieceKind, Position, SPAWN_POSITION};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let i = piece_for(PieceKind::I);
    assert_eq!(*i.shape(0), [(-1, 0), (0, 0), (1, 0), (2, 0)]);
    assert_eq!(*i.shape(1), [(0, -1), (0, 0), (0, 1), (0, 2)]);
    assert_eq!(*i.shape(2), [(-1, 1), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(*i.shape(3), [(1, -1), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(i.color, Color::Cyan);
}

#[test]
fn test_o_piece_has_one_state() {
    let o = piece_for(PieceKind::O);
    assert_eq!(o.rotation_count(), 1);
    assert_eq!(*o.shape(0), [(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_t_piece_shapes() {
    let t = piece_for(PieceKind::T);
    assert_eq!(*t.shape(0), [(-1, 0), (0, 0), (1, 0), (0, 1)]);
    assert_eq!(*t.shape(1), [(0, -1), (0, 0), (0, 1), (-1, 0)]);
    assert_eq!(*t.shape(2), [(-1, 0), (0, 0), (1, 0), (0, -1)]);
    assert_eq!(*t.shape(3), [(0, -1), (0, 0), (0, 1), (1, 0)]);
}

#[test]
fn test_s_and_z_repeat_two_states() {
    for kind in [PieceKind::S, PieceKind::Z] {
        let p = piece_for(kind);
        assert_eq!(p.rotation_count(), 4);
        assert_eq!(p.shape(0), p.shape(2), "{:?}", kind);
        assert_eq!(p.shape(1), p.shape(3), "{:?}", kind);
        assert_ne!(p.shape(0), p.shape(1), "{:?}", kind);
    }
}

#[test]
fn test_j_and_l_shapes() {
    let j = piece_for(PieceKind::J);
    assert_eq!(*j.shape(0), [(-1, 0), (0, 0), (1, 0), (1, 1)]);
    assert_eq!(*j.shape(2), [(-1, -1), (-1, 0), (0, 0), (1, 0)]);

    let l = piece_for(PieceKind::L);
    assert_eq!(*l.shape(0), [(-1, 0), (0, 0), (1, 0), (-1, 1)]);
    assert_eq!(*l.shape(1), [(0, -1), (0, 0), (0, 1), (-1, -1)]);
}

// ============== Catalog Tests ==============

#[test]
fn test_spawn_position() {
    assert_eq!(SPAWN_POSITION, Position::new(4, 0));
}

#[test]
fn test_rotation_cycle_returns_to_start() {
    for kind in PieceKind::ALL {
        let piece = piece_for(kind);
        let mut r = 0;
        for _ in 0..piece.rotation_count() {
            r = next_rotation_index(piece, r);
        }
        assert_eq!(r, 0, "{:?}", kind);
    }
}

#[test]
fn test_random_piece_is_reproducible() {
    let mut a = SimpleRng::new(2024);
    let mut b = SimpleRng::new(2024);
    for _ in 0..100 {
        assert_eq!(random_piece(&mut a).kind, random_piece(&mut b).kind);
    }
}

#[test]
fn test_random_piece_draws_every_kind() {
    let mut rng = SimpleRng::new(5);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let kind = random_piece(&mut rng).kind;
        let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

/// Always answers with the largest legal value.
struct Highest;

impl Randomizer for Highest {
    fn next_range(&mut self, max: u32) -> u32 {
        max - 1
    }
}

#[test]
fn test_custom_randomizer_is_honored() {
    assert_eq!(random_piece(&mut Highest).kind, PieceKind::L);
}
