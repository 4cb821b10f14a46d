use itertools::iproduct;
use smallvec::SmallVec;

use crate::types::RouteKind;

pub type VertexId = u16;

/// Sentinel distance for "no connection". Real hop counts stay well
/// below this on any board the builder accepts.
pub const DISTANCE_INFINITY: u8 = 100;

/// Reconstructed paths are short; keep them inline.
pub type Path = SmallVec<[VertexId; 16]>;

/// Precomputed all-pairs shortest hop counts and next-hop matrix over
/// the vertex graph. Built once at board setup, then queried read-only
/// by the bot to score placements by connectivity.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    n: usize,
    dist: Vec<u8>,
    next: Vec<VertexId>,
}

impl DistanceMap {
    /// Take ownership of matrices built by an external shortest-path
    /// pass. `next[i][j]` must be the first hop on some shortest i→j
    /// path whenever `dist[i][j]` is finite.
    pub fn from_matrices(n: usize, dist: Vec<u8>, next: Vec<VertexId>) -> Self {
        assert_eq!(dist.len(), n * n, "distance matrix is not {n}x{n}");
        assert_eq!(next.len(), n * n, "next-hop matrix is not {n}x{n}");
        Self { n, dist, next }
    }

    /// Build both matrices by Floyd–Warshall over the routes that count
    /// for connectivity (see `RouteKind::counts_as_route`). Edges are
    /// undirected unit hops; the fixed relaxation order makes the
    /// next-hop tie-break deterministic.
    pub fn from_routes(n: usize, routes: &[(VertexId, VertexId, RouteKind)]) -> Self {
        assert!(
            n < DISTANCE_INFINITY as usize,
            "{n} vertices would collide with the infinity sentinel"
        );

        let mut dist = vec![DISTANCE_INFINITY; n * n];
        let mut next: Vec<VertexId> = vec![0; n * n];
        for i in 0..n {
            dist[i * n + i] = 0;
            next[i * n + i] = i as VertexId;
        }
        let mut traversable = 0usize;
        for &(a, b, kind) in routes {
            if !kind.counts_as_route() {
                continue;
            }
            let (a, b) = (a as usize, b as usize);
            assert!(a < n && b < n, "route endpoint out of range: {a}-{b}");
            dist[a * n + b] = 1;
            dist[b * n + a] = 1;
            next[a * n + b] = b as VertexId;
            next[b * n + a] = a as VertexId;
            traversable += 1;
        }

        for (k, i, j) in iproduct!(0..n, 0..n, 0..n) {
            let through = dist[i * n + k].saturating_add(dist[k * n + j]);
            if through < dist[i * n + j] {
                dist[i * n + j] = through;
                next[i * n + j] = next[i * n + k];
            }
        }

        tracing::debug!(
            vertices = n,
            routes = routes.len(),
            traversable,
            "distance matrices computed"
        );
        Self { n, dist, next }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Shortest hop count, or `DISTANCE_INFINITY` when unreachable.
    /// Out-of-range vertex indices are a caller bug and panic.
    pub fn distance(&self, from: VertexId, to: VertexId) -> u8 {
        self.dist[self.idx(from, to)]
    }

    pub fn is_reachable(&self, from: VertexId, to: VertexId) -> bool {
        self.distance(from, to) < DISTANCE_INFINITY
    }

    /// The vertices of a shortest path from `from` to `to`, inclusive of
    /// both. `[from]` when the endpoints coincide, empty when there is no
    /// connection.
    pub fn shortest_path(&self, from: VertexId, to: VertexId) -> Path {
        let mut path = Path::new();
        if self.distance(from, to) == DISTANCE_INFINITY {
            return path;
        }
        path.push(from);
        if from == to {
            return path;
        }

        let mut current = from;
        // Distance strictly decreases along next-hops, so the walk takes
        // at most n steps; more than that means the builder handed us a
        // cyclic next matrix.
        for _ in 0..self.n {
            current = self.next[self.idx(current, to)];
            path.push(current);
            if current == to {
                return path;
            }
        }
        panic!("next-hop matrix is inconsistent: no path from {from} to {to} after {} hops", self.n);
    }

    fn idx(&self, from: VertexId, to: VertexId) -> usize {
        let (from, to) = (from as usize, to as usize);
        assert!(
            from < self.n && to < self.n,
            "vertex index out of range: ({from},{to}) on a {}-vertex board",
            self.n
        );
        from * self.n + to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0-1-2-3-4 path plus an isolated vertex 5.
    fn path_graph() -> DistanceMap {
        let routes = [
            (0, 1, RouteKind::Road),
            (1, 2, RouteKind::Road),
            (2, 3, RouteKind::Road),
            (3, 4, RouteKind::Road),
        ];
        DistanceMap::from_routes(6, &routes)
    }

    #[test]
    fn identity_distance_is_zero() {
        let map = path_graph();
        for i in 0..map.len() as VertexId {
            assert_eq!(map.distance(i, i), 0);
            assert_eq!(map.shortest_path(i, i).as_slice(), &[i]);
        }
    }

    #[test]
    fn path_graph_end_to_end() {
        let map = path_graph();
        assert_eq!(map.distance(0, 4), 4);
        assert_eq!(map.shortest_path(0, 4).as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(map.distance(4, 0), 4);
        assert_eq!(map.shortest_path(4, 0).as_slice(), &[4, 3, 2, 1, 0]);
    }

    #[test]
    fn unreachable_pairs_report_infinity_and_empty_path() {
        let map = path_graph();
        assert_eq!(map.distance(0, 5), DISTANCE_INFINITY);
        assert!(!map.is_reachable(0, 5));
        assert!(map.shortest_path(0, 5).is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_vertex_panics() {
        let map = path_graph();
        let _ = map.distance(0, 10);
    }

    #[test]
    fn non_traversable_kinds_do_not_connect() {
        let routes = [
            (0, 1, RouteKind::Road),
            (1, 2, RouteKind::DamagedRoad),
            (2, 3, RouteKind::Warship),
            (3, 4, RouteKind::Ship),
        ];
        let map = DistanceMap::from_routes(5, &routes);
        assert_eq!(map.distance(0, 1), 1);
        assert_eq!(map.distance(1, 2), DISTANCE_INFINITY);
        assert_eq!(map.distance(2, 3), DISTANCE_INFINITY);
        assert_eq!(map.distance(3, 4), 1);
    }

    #[test]
    fn shortcut_beats_long_way_round() {
        // Ring 0-1-2-3-4-5-0 with a chord 0-3.
        let routes = [
            (0, 1, RouteKind::Road),
            (1, 2, RouteKind::Road),
            (2, 3, RouteKind::Road),
            (3, 4, RouteKind::Road),
            (4, 5, RouteKind::Road),
            (5, 0, RouteKind::Road),
            (0, 3, RouteKind::Ship),
        ];
        let map = DistanceMap::from_routes(6, &routes);
        assert_eq!(map.distance(0, 3), 1);
        assert_eq!(map.distance(1, 4), 3);
        let path = map.shortest_path(0, 4);
        assert_eq!(path.len() as u8, map.distance(0, 4) + 1);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&4));
    }

    #[test]
    fn triangle_inequality_holds() {
        let map = path_graph();
        let n = map.len() as VertexId;
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let ij = map.distance(i, j);
                    let jk = map.distance(j, k);
                    if ij < DISTANCE_INFINITY && jk < DISTANCE_INFINITY {
                        assert!(map.distance(i, k) <= ij + jk);
                    }
                }
            }
        }
    }

    #[test]
    fn paths_walk_graph_edges() {
        let map = path_graph();
        let path = map.shortest_path(0, 4);
        for pair in path.windows(2) {
            assert_eq!(map.distance(pair[0], pair[1]), 1);
        }
    }

    #[test]
    #[should_panic(expected = "inconsistent")]
    fn cyclic_next_matrix_is_detected() {
        // dist claims 0->1 reachable but next loops 0->2->0.
        let n = 3;
        let mut dist = vec![DISTANCE_INFINITY; n * n];
        let mut next = vec![0u16; n * n];
        for i in 0..n {
            dist[i * n + i] = 0;
        }
        dist[1] = 1; // (0,1)
        next[1] = 2;
        next[2 * n + 1] = 0;
        dist[2 * n + 1] = 1;
        let map = DistanceMap::from_matrices(n, dist, next);
        let _ = map.shortest_path(0, 1);
    }
}
