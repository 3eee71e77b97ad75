//! Randomized comparison of `Stack` against a plain `Vec` model.

use rand::{rngs::StdRng, Rng, SeedableRng};
use switchstack::{Mode, Stack};

struct Model {
    items: Vec<u16>,
    mode: Mode,
}

impl Model {
    fn peek(&self) -> Option<&u16> {
        match self.mode {
            Mode::Fifo => self.items.first(),
            Mode::Lifo => self.items.last(),
        }
    }

    fn pop(&mut self) -> Option<u16> {
        if self.items.is_empty() {
            return None;
        }
        match self.mode {
            Mode::Fifo => Some(self.items.remove(0)),
            Mode::Lifo => self.items.pop(),
        }
    }
}

#[test]
fn test_random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let mut stack: Stack<u16> = Stack::new();
        let mut model = Model { items: Vec::new(), mode: Mode::Fifo };
        let mut accepted = 0usize;
        let mut popped = 0usize;

        for _ in 0..500 {
            match rng.gen_range(0..10) {
                0..=3 => {
                    let item: Option<u16> = if rng.gen_bool(0.9) { Some(rng.gen()) } else { None };
                    if let Some(value) = item {
                        model.items.push(value);
                        accepted += 1;
                    }
                    stack.push(item);
                }
                4 | 5 => {
                    let expected = model.pop();
                    if expected.is_some() {
                        popped += 1;
                    }
                    assert_eq!(stack.pop(), expected);
                }
                6 => {
                    let code: u8 = rng.gen_range(0..4);
                    if let Ok(mode) = Mode::try_from(code) {
                        model.mode = mode;
                    }
                    stack.set_mode(code);
                }
                7 => {
                    stack.reverse();
                    model.items.reverse();
                }
                8 => {
                    let len = rng.gen_range(0..4);
                    let items: Vec<u16> = (0..len).map(|_| rng.gen()).collect();
                    if !items.is_empty() {
                        // replace resets the push/pop accounting
                        accepted = items.len();
                        popped = 0;
                        model.items = items.clone();
                    }
                    stack.replace_all(&items);
                }
                _ => {
                    assert_eq!(stack.peek(), model.peek());
                }
            }

            assert_eq!(stack.mode(), model.mode);
            assert_eq!(stack.len(), model.items.len());
            assert_eq!(stack.len(), accepted - popped);
        }

        assert_eq!(stack.to_vec(), model.items);
        let mode = stack.mode();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.mode(), mode);
    }
}
