/*
Rendering of the mansion map with termtree.
One line per room, `name [clue]`, left door listed before right door.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::mansion::Mansion;
use crate::domain::room::RoomId;

pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeConvert for Mansion {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(mansion: &Mansion, idx: RoomId) -> Option<Tree<String>> {
            let room = mansion.room(idx)?;
            let leaves: Vec<_> = [room.left, room.right]
                .into_iter()
                .flatten()
                .filter_map(|child| build_tree(mansion, child))
                .collect();
            Some(Tree::new(room.to_string()).with_leaves(leaves))
        }

        self.root()
            .and_then(|root| build_tree(self, root))
            .unwrap_or_else(|| Tree::new("Empty mansion".to_string()))
    }
}
