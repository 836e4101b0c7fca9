use rand::Rng;

use super::cluster::{Cluster, ClusterId};

/// Nearest-neighbor directions, in the order the cluster search visits them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
}

/// A single cell of the square lattice
///
/// Boundary flags are derived from the position and the lattice length when the
/// site is created and cannot change afterwards.
#[derive(Debug, Clone)]
pub struct Site {
    /// Row-major index into the flattened L x L grid
    pub position: usize,
    pub occupied: bool,
    /// Marker used by the cluster search
    pub visited: bool,
    /// 0-based row index
    pub row: usize,
    /// Cluster this site belongs to, if any
    pub cluster: Option<ClusterId>,
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
}

impl Site {
    pub fn new(position: usize, length: usize, row: usize) -> Self {
        let x = position;
        let l = length;
        Self {
            position,
            occupied: false,
            visited: false,
            row,
            cluster: None,
            // (x + 1) < L leaves the top-right corner off the top edge
            top: x + 1 < l,
            bottom: x + 1 > l * l.saturating_sub(1),
            left: x % l == 0,
            right: (x + 1) % l == 0,
        }
    }

    pub fn is_top(&self) -> bool {
        self.top
    }

    pub fn is_bottom(&self) -> bool {
        self.bottom
    }

    pub fn is_left(&self) -> bool {
        self.left
    }

    pub fn is_right(&self) -> bool {
        self.right
    }

    /// Index of the nearest neighbor in `direction`.
    ///
    /// A site on the boundary the direction points out of is its own neighbor.
    /// The top-right corner carries no top flag, so `Up` also checks the row.
    pub fn nearest_neighbor(&self, direction: Direction, length: usize) -> usize {
        let x = self.position;
        match direction {
            Direction::Right if self.right => x,
            Direction::Right => x + 1,
            Direction::Down if self.bottom => x,
            Direction::Down => x + length,
            Direction::Left if self.left => x,
            Direction::Left => x - 1,
            Direction::Up if self.top || x < length => x,
            Direction::Up => x - length,
        }
    }
}

/// 2D square lattice for site percolation
///
/// Sites are stored row-major; each one is occupied independently with the
/// occupation probability.
#[derive(Debug, Clone)]
pub struct Lattice {
    /// Lattice side length (L x L)
    pub length: usize,
    /// Site occupation probability
    pub occupation_probability: f64,
    sites: Vec<Site>,
    clusters: Vec<Cluster>,
}

impl Lattice {
    /// Create a random lattice, drawing one uniform number per site
    pub fn new<R: Rng + ?Sized>(length: usize, occupation_probability: f64, rng: &mut R) -> Self {
        let size = length * length;
        let mut sites = Vec::with_capacity(size);
        let mut row = 0;

        for i in 0..size {
            if i > 0 && i % length == 0 {
                row += 1;
            }
            let mut site = Site::new(i, length, row);
            site.occupied = rng.gen::<f64>() < occupation_probability;
            sites.push(site);
        }

        Self {
            length,
            occupation_probability,
            sites,
            clusters: Vec::new(),
        }
    }

    /// Create a lattice with a fixed occupation pattern (row-major)
    ///
    /// Missing entries are treated as empty sites.
    pub fn from_occupancy(length: usize, occupancy: &[bool]) -> Self {
        let size = length * length;
        let sites: Vec<Site> = (0..size)
            .map(|i| {
                let mut site = Site::new(i, length, i / length);
                site.occupied = occupancy.get(i).copied().unwrap_or(false);
                site
            })
            .collect();

        let occupied = sites.iter().filter(|s| s.occupied).count();
        let occupation_probability = if size == 0 {
            0.0
        } else {
            occupied as f64 / size as f64
        };

        Self {
            length,
            occupation_probability,
            sites,
            clusters: Vec::new(),
        }
    }

    /// Total number of sites (L^2)
    pub fn size(&self) -> usize {
        self.sites.len()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn site(&self, index: usize) -> &Site {
        &self.sites[index]
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn cluster(&self, id: ClusterId) -> &Cluster {
        &self.clusters[id.index()]
    }

    pub fn occupied_count(&self) -> usize {
        self.sites.iter().filter(|s| s.occupied).count()
    }

    /// Nearest neighbor of the site at `index`, with self-loops on the boundary
    pub fn nearest_neighbor(&self, index: usize, direction: Direction) -> &Site {
        &self.sites[self.sites[index].nearest_neighbor(direction, self.length)]
    }

    /// Sites at lattice (Manhattan) distance `r` from the site at `index`.
    ///
    /// Candidates are generated on the four edges of the diamond around the
    /// site. A candidate that falls off the grid, or wraps into a different row
    /// than its offset implies, is skipped.
    pub fn neighbors_at_radius(&self, index: usize, r: usize) -> Vec<usize> {
        let l = self.length as isize;
        let x = index as isize;
        let row = self.sites[index].row as isize;
        let r = r as isize;

        let mut neighbors = Vec::new();
        for i in 0..r {
            let offsets = [(i, r - i), (r - i, -i), (-i, -(r - i)), (-(r - i), i)];
            for (d_row, d_col) in offsets {
                let expected_row = row + d_row;
                if expected_row < 0 || expected_row >= l {
                    continue;
                }
                let candidate = x + d_row * l + d_col;
                if candidate < 0 || candidate as usize >= self.sites.len() {
                    continue;
                }
                if self.sites[candidate as usize].row as isize == expected_row {
                    neighbors.push(candidate as usize);
                }
            }
        }
        neighbors
    }

    /// Flat index of the center site, or `None` for an empty lattice
    pub fn center(&self) -> Option<usize> {
        if self.sites.is_empty() {
            return None;
        }
        let l = self.length;
        Some((l * (l - 1) + (l - 1)) / 2)
    }

    /// Label every occupied site with its cluster.
    ///
    /// Sites are scanned in index order and every occupied, unvisited site
    /// seeds a new cluster grown by depth-first search.
    pub fn find_clusters(&mut self) {
        for k in 0..self.sites.len() {
            if self.sites[k].occupied && !self.sites[k].visited {
                self.grow_cluster(k);
            }
        }
    }

    /// Grow the cluster rooted at `root` with an explicit stack
    fn grow_cluster(&mut self, root: usize) -> ClusterId {
        let id = ClusterId::new(self.clusters.len());
        let mut cluster = Cluster::new(self.length, root);

        self.sites[root].visited = true;
        self.sites[root].cluster = Some(id);

        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            for direction in Direction::ALL {
                let next = self.nearest_neighbor(current, direction).position;
                let neighbor = &mut self.sites[next];
                if neighbor.occupied && !neighbor.visited {
                    neighbor.visited = true;
                    neighbor.cluster = Some(id);
                    cluster.add_site(next);
                    stack.push(next);
                }
            }
        }

        self.clusters.push(cluster);
        id
    }

    /// Whether the cluster with `id` spans the lattice
    pub fn is_percolating(&self, id: ClusterId) -> bool {
        self.cluster(id).is_percolating(&self.sites)
    }

    /// Whether any cluster in the lattice spans it
    pub fn percolates(&self) -> bool {
        self.clusters.iter().any(|c| c.is_percolating(&self.sites))
    }

    pub fn largest_cluster_size(&self) -> usize {
        self.clusters.iter().map(Cluster::size).max().unwrap_or(0)
    }

    /// Print the cluster labels (useful for small systems)
    pub fn print_configuration(&self) {
        for row in self.sites.chunks(self.length.max(1)) {
            for site in row {
                match site.cluster {
                    Some(id) => print!("{:>4}", id.index()),
                    None => print!("{:>4}", "."),
                }
            }
            println!();
        }
    }
}
