use super::lattice::Site;

/// Handle to a cluster in its lattice's cluster table
///
/// Two sites are in the same cluster iff they carry the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterId(usize);

impl ClusterId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A connected component of occupied sites
#[derive(Debug, Clone)]
pub struct Cluster {
    /// Side length of the owning lattice
    length: usize,
    root: usize,
    /// Member site indices in the order the search reached them
    sites: Vec<usize>,
}

impl Cluster {
    pub fn new(length: usize, root: usize) -> Self {
        Self {
            length,
            root,
            sites: vec![root],
        }
    }

    pub(crate) fn add_site(&mut self, site: usize) {
        self.sites.push(site);
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn sites(&self) -> &[usize] {
        &self.sites
    }

    pub fn size(&self) -> usize {
        self.sites.len()
    }

    /// Whether the cluster joins two opposite edges of the lattice.
    ///
    /// Only the first matching flag of each member is considered, in the order
    /// top, bottom, left, right, so a corner site counts for one edge only.
    pub fn is_percolating(&self, lattice_sites: &[Site]) -> bool {
        if self.size() < self.length {
            return false;
        }

        let mut top = false;
        let mut bottom = false;
        let mut left = false;
        let mut right = false;

        for &index in &self.sites {
            let site = &lattice_sites[index];
            if site.is_top() {
                top = true;
                if bottom {
                    return true;
                }
            } else if site.is_bottom() {
                bottom = true;
                if top {
                    return true;
                }
            } else if site.is_left() {
                left = true;
                if right {
                    return true;
                }
            } else if site.is_right() {
                right = true;
                if left {
                    return true;
                }
            }
        }
        false
    }
}
