//! The mansion map: a fixed binary tree of rooms, assembled once at
//! startup and only read during play (the investigate mode may clear a
//! room's clue after collecting it).

/// A branch choice at a room. Player commands map "e" (esquerda) to
/// `Left` and "d" (direita) to `Right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "esquerda",
            Direction::Right => "direita",
        }
    }
}

/// One room of the mansion. Each child is owned exclusively by its
/// parent, so the map is a finite rooted tree and dropping the root
/// releases every room; there is no separate destroy step to misuse.
#[derive(Clone, Debug)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// A room with no clue and no exits yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clue: None,
            left: None,
            right: None,
        }
    }

    /// A room carrying a clue.
    pub fn with_clue(name: impl Into<String>, clue: impl Into<String>) -> Self {
        let mut room = Self::new(name);
        room.clue = Some(clue.into());
        room
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Removes and returns the room's clue, leaving the room without
    /// one. Used by the investigate mode so a room cannot yield the
    /// same clue twice.
    pub fn take_clue(&mut self) -> Option<String> {
        self.clue.take()
    }

    /// Wires the left exit. Tree shape is fixed once assembly is done.
    pub fn set_left(&mut self, room: Room) {
        self.left = Some(Box::new(room));
    }

    /// Wires the right exit.
    pub fn set_right(&mut self, room: Room) {
        self.right = Some(Box::new(room));
    }

    pub fn child(&self, dir: Direction) -> Option<&Room> {
        match dir {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub fn child_mut(&mut self, dir: Direction) -> Option<&mut Room> {
        match dir {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of rooms in this subtree, this room included.
    pub fn room_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |r| r.room_count())
            + self.right.as_ref().map_or(0, |r| r.room_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_map() -> Room {
        let mut hall = Room::new("Hall");
        let mut jantar = Room::with_clue("Sala de Jantar", "talheres sumiram");
        jantar.set_left(Room::new("Cozinha"));
        hall.set_left(jantar);
        hall.set_right(Room::new("Biblioteca"));
        hall
    }

    #[test]
    fn children_are_addressed_by_direction() {
        let map = small_map();
        assert_eq!(map.child(Direction::Left).unwrap().name(), "Sala de Jantar");
        assert_eq!(map.child(Direction::Right).unwrap().name(), "Biblioteca");
        assert!(map
            .child(Direction::Left)
            .unwrap()
            .child(Direction::Right)
            .is_none());
    }

    #[test]
    fn leaf_detection() {
        let map = small_map();
        assert!(!map.is_leaf());
        assert!(map.child(Direction::Right).unwrap().is_leaf());
    }

    #[test]
    fn take_clue_clears_the_room() {
        let mut map = small_map();
        let jantar = map.child_mut(Direction::Left).unwrap();
        assert_eq!(jantar.clue(), Some("talheres sumiram"));
        assert_eq!(jantar.take_clue().as_deref(), Some("talheres sumiram"));
        assert_eq!(jantar.clue(), None);
        assert_eq!(jantar.take_clue(), None);
    }

    #[test]
    fn room_count_covers_the_subtree() {
        assert_eq!(small_map().room_count(), 4);
        assert_eq!(Room::new("so").room_count(), 1);
    }
}
