use crate::puzzle::{CellId, Layout};

/// For every cell, the cells sharing its row, column, or block.
///
/// Irreflexive and symmetric by construction. Built once per run from the
/// layout and never mutated; the engines work on filtered copies.
#[derive(Clone, Debug)]
pub struct PeerMap {
    peers: Vec<Vec<CellId>>,
}

impl PeerMap {
    pub fn new(layout: &Layout) -> Self {
        let peers = layout
            .cell_ids()
            .map(|id| {
                let coord = layout.coord_at(id);
                let block = layout.block_at(coord);
                layout
                    .cell_ids()
                    .filter(|&other| other != id)
                    .filter(|&other| {
                        let other_coord = layout.coord_at(other);
                        other_coord.row() == coord.row()
                            || other_coord.col() == coord.col()
                            || layout.block_at(other_coord) == block
                    })
                    .collect()
            })
            .collect();
        Self { peers }
    }

    pub fn peers(&self, id: CellId) -> &[CellId] {
        &self.peers[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &[CellId])> {
        self.peers.iter().enumerate().map(|(id, p)| (id, &p[..]))
    }
}

#[cfg(test)]
mod tests {
    use super::PeerMap;
    use crate::puzzle::Layout;

    fn peer_count(size: usize, block_rows: usize, block_cols: usize) -> usize {
        2 * (size - 1) + block_rows * block_cols - block_rows - block_cols + 1
    }

    #[test]
    fn peer_counts() {
        for &(size, p, q) in &[(4, 2, 2), (6, 2, 3), (6, 3, 2), (9, 3, 3), (12, 3, 4)] {
            let layout = Layout::new(size, p, q).unwrap();
            let peers = PeerMap::new(&layout);
            for (id, cell_peers) in peers.iter() {
                assert_eq!(
                    cell_peers.len(),
                    peer_count(size, p, q),
                    "cell {} in {}x{} grid",
                    id,
                    size,
                    size
                );
            }
        }
    }

    #[test]
    fn irreflexive_and_symmetric() {
        let layout = Layout::new(6, 2, 3).unwrap();
        let peers = PeerMap::new(&layout);
        for (id, cell_peers) in peers.iter() {
            assert!(!cell_peers.contains(&id));
            for &peer in cell_peers {
                assert!(peers.peers(peer).contains(&id));
            }
        }
    }

    #[test]
    fn row_column_and_block_members() {
        let layout = Layout::new(4, 2, 2).unwrap();
        let peers = PeerMap::new(&layout);
        // cell (0, 0): row 0, column 0, top-left block
        let expected = [1, 2, 3, 4, 5, 8, 12];
        assert_eq!(peers.peers(0), &expected);
    }
}
