use std::fmt;

use itertools::{iproduct, Itertools, MinMaxResult};
use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

/// Input coordinates are `i32`; they are held as `i64` so the box margin and neighbours of
/// extreme inputs stay representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Voxel {pub x: i64, pub y: i64, pub z: i64}

impl Voxel {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {Voxel {x, y, z}}

    /// The six voxels sharing a face with this one.
    pub fn neighbors(self) -> [Voxel; 6] {
        let Voxel {x, y, z} = self;
        [
            Voxel::new(x + 1, y, z), Voxel::new(x - 1, y, z),
            Voxel::new(x, y + 1, z), Voxel::new(x, y - 1, z),
            Voxel::new(x, y, z + 1), Voxel::new(x, y, z - 1),
        ]
    }
}

impl fmt::Display for Voxel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Inclusive box that the exterior flood fill is confined to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {pub min: Voxel, pub max: Voxel}

impl BoundingBox {
    /// Smallest box holding the whole droplet, grown by one voxel on every side so that the
    /// air around the droplet forms a single connected shell.
    pub fn around(droplet: &Droplet) -> Self {
        let axis = |coord: fn(&Voxel) -> i64| match droplet.voxels.iter().map(coord).minmax() {
            MinMaxResult::MinMax(min, max) => (min - 1, max + 1),
            MinMaxResult::OneElement(c) => (c - 1, c + 1),
            MinMaxResult::NoElements => unreachable!("droplets are never empty"),
        };
        let (min_x, max_x) = axis(|v| v.x);
        let (min_y, max_y) = axis(|v| v.y);
        let (min_z, max_z) = axis(|v| v.z);
        BoundingBox {min: Voxel::new(min_x, min_y, min_z), max: Voxel::new(max_x, max_y, max_z)}
    }

    pub fn contains(&self, v: Voxel) -> bool {
        (self.min.x ..= self.max.x).contains(&v.x) &&
        (self.min.y ..= self.max.y).contains(&v.y) &&
        (self.min.z ..= self.max.z).contains(&v.z)
    }

    /// Every voxel lying on one of the six faces of the box.
    pub fn shell(&self) -> FxHashSet<Voxel> {
        let BoundingBox {min, max} = *self;
        let mut shell = FxHashSet::default();
        for (x, y) in iproduct!(min.x ..= max.x, min.y ..= max.y) {
            shell.insert(Voxel::new(x, y, min.z));
            shell.insert(Voxel::new(x, y, max.z));
        }
        for (x, z) in iproduct!(min.x ..= max.x, min.z ..= max.z) {
            shell.insert(Voxel::new(x, min.y, z));
            shell.insert(Voxel::new(x, max.y, z));
        }
        for (y, z) in iproduct!(min.y ..= max.y, min.z ..= max.z) {
            shell.insert(Voxel::new(min.x, y, z));
            shell.insert(Voxel::new(max.x, y, z));
        }
        shell
    }
}

/// A non-empty set of occupied voxels.
#[derive(Clone, Debug)]
pub struct Droplet {voxels: FxHashSet<Voxel>}

impl Droplet {
    pub fn new(voxels: impl IntoIterator<Item = Voxel>) -> Result<Self> {
        let voxels = voxels.into_iter().collect::<FxHashSet<_>>();
        if voxels.is_empty() {return Err(Error::EmptyDroplet)};
        Ok(Droplet {voxels})
    }

    /// Reads one `x,y,z` voxel per line; blank lines are skipped.
    pub fn parse(input: &str) -> Result<Self> {
        let voxels = input.lines().enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(ix, line)| parse_voxel(ix + 1, line))
            .collect::<Result<Vec<_>>>()?;
        Self::new(voxels)
    }

    fn len(&self) -> usize {self.voxels.len()}

    pub fn contains(&self, v: Voxel) -> bool {self.voxels.contains(&v)}

    /// Faces not touching another voxel of the droplet, trapped air pockets included.
    pub fn surface_area(&self) -> usize {
        self.voxels.iter().map(|v|
            v.neighbors().into_iter().filter(|&n| !self.contains(n)).count()
        ).sum()
    }

    /// Empty voxels of the bounding box reachable from its faces without passing through the
    /// droplet. Filled layer by layer starting from the whole shell of the box.
    pub fn exterior(&self) -> FxHashSet<Voxel> {
        let bounds = BoundingBox::around(self);
        debug!("bounding box {} ..= {}", bounds.min, bounds.max);

        let mut exterior = FxHashSet::default();
        let mut frontier = bounds.shell();
        let mut next = FxHashSet::default();
        let mut layers = 0;
        while !frontier.is_empty() {
            trace!("layer {}: {} voxels", layers, frontier.len());
            for &voxel in &frontier {
                for neighbor in voxel.neighbors() {
                    if bounds.contains(neighbor) && !self.contains(neighbor) &&
                       !exterior.contains(&neighbor) && !frontier.contains(&neighbor) {
                        next.insert(neighbor);
                    }
                }
            }
            exterior.extend(frontier.drain());
            std::mem::swap(&mut frontier, &mut next);
            layers += 1;
        }
        debug!("{} exterior voxels after {} layers", exterior.len(), layers);
        exterior
    }

    /// Faces touching the outside air.
    pub fn exterior_surface_area(&self) -> usize {
        self.exterior().iter().map(|v|
            v.neighbors().into_iter().filter(|&n| self.contains(n)).count()
        ).sum()
    }
}

fn parse_voxel(line: usize, s: &str) -> Result<Voxel> {
    let fields = s.trim().split(',').map(str::trim).collect::<Vec<_>>();
    let [x, y, z] = fields[..] else {
        return Err(Error::CoordinateCount {line, found: fields.len()});
    };
    let coord = |text: &str| text.parse::<i32>().map(i64::from).map_err(|source|
        Error::Coordinate {line, text: text.to_owned(), source}
    );
    Ok(Voxel::new(coord(x)?, coord(y)?, coord(z)?))
}

pub fn day18(part: u8, input: &str) -> Result<String> {
    let droplet = Droplet::parse(input)?;
    debug!("droplet of {} voxels", droplet.len());
    let area = if part == 1 {droplet.surface_area()} else {droplet.exterior_surface_area()};
    Ok(area.to_string())
}
