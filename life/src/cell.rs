/// One board square: live or dead, plus the number of consecutive
/// generations it has survived.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub age: u32,
}

impl Cell {
    /// The standard birth/survival rules with age bookkeeping: surviving
    /// adds a generation, birth starts at zero, death clears it.
    pub fn next(self, live_neighbours: usize) -> Cell {
        match (self.alive, live_neighbours) {
            (true, 2..=3) => Cell {
                alive: true,
                age: self.age.saturating_add(1),
            },
            (false, 3) => Cell { alive: true, age: 0 },
            _ => Cell::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BORN: Cell = Cell { alive: true, age: 0 };
    const DEAD: Cell = Cell { alive: false, age: 0 };

    #[test]
    fn underpopulation() {
        for n in 0..2 {
            assert_eq!(Cell { alive: true, age: 7 }.next(n), DEAD);
        }
    }

    #[test]
    fn survival_ages_the_cell() {
        for n in 2..=3 {
            assert_eq!(
                Cell { alive: true, age: 7 }.next(n),
                Cell { alive: true, age: 8 }
            );
        }
    }

    #[test]
    fn overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell { alive: true, age: 3 }.next(n), DEAD);
        }
    }

    #[test]
    fn birth_starts_at_age_zero() {
        assert_eq!(DEAD.next(3), BORN);
    }

    #[test]
    fn dead_stays_dead() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(DEAD.next(n), DEAD);
        }
    }
}
