//! Contains the problem instance model together with its text reader and writer.

#[cfg(test)]
#[path = "../../tests/unit/instance/instance_test.rs"]
mod instance_test;

mod distances;
pub use self::distances::*;

mod reader;
pub use self::reader::VerologInstance;

mod writer;
pub use self::writer::write_instance;

use std::cell::OnceCell;

/// Max supported planning horizon length.
pub const MAX_DAYS: i64 = 10_000;

/// Keywords of the instance text format in order of appearance.
pub(crate) mod keywords {
    pub const DATASET: &str = "DATASET";
    pub const NAME: &str = "NAME";
    pub const DAYS: &str = "DAYS";
    pub const TRUCK_CAPACITY: &str = "TRUCK_CAPACITY";
    pub const TRUCK_MAX_DISTANCE: &str = "TRUCK_MAX_DISTANCE";
    pub const TRUCK_DISTANCE_COST: &str = "TRUCK_DISTANCE_COST";
    pub const TRUCK_DAY_COST: &str = "TRUCK_DAY_COST";
    pub const TRUCK_COST: &str = "TRUCK_COST";
    pub const TECHNICIAN_DISTANCE_COST: &str = "TECHNICIAN_DISTANCE_COST";
    pub const TECHNICIAN_DAY_COST: &str = "TECHNICIAN_DAY_COST";
    pub const TECHNICIAN_COST: &str = "TECHNICIAN_COST";
    pub const MACHINES: &str = "MACHINES";
    pub const LOCATIONS: &str = "LOCATIONS";
    pub const REQUESTS: &str = "REQUESTS";
    pub const TECHNICIANS: &str = "TECHNICIANS";
    pub const DISTANCE: &str = "DISTANCE";
}

/// A machine type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Machine {
    /// Machine type id.
    pub id: i64,
    /// Amount of truck capacity used by one machine.
    pub size: i64,
    /// A penalty paid for each day a delivered machine waits for installation.
    pub idle_penalty: i64,
}

/// A location. Location with id 1 is the depot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Location id.
    pub id: i64,
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
}

/// A customer request: delivery and installation of machines of one type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    /// Request id.
    pub id: i64,
    /// Location id of the customer.
    pub customer_location_id: i64,
    /// First day of the delivery window.
    pub from_day: i64,
    /// Last day of the delivery window.
    pub to_day: i64,
    /// Requested machine type id.
    pub machine_id: i64,
    /// Amount of requested machines.
    pub amount: i64,
}

/// A technician which installs delivered machines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Technician {
    /// Technician id.
    pub id: i64,
    /// Home location id, every technician route starts and ends there.
    pub location_id: i64,
    /// Max distance travelled per day.
    pub max_day_distance: i64,
    /// Max amount of installations per day.
    pub max_installations: i64,
    /// Whether machine type with index `i + 1` can be installed.
    pub capabilities: Vec<bool>,
}

impl Technician {
    /// Returns true if technician can install given machine type.
    pub fn can_install(&self, machine_id: i64) -> Option<bool> {
        to_index(machine_id).and_then(|idx| self.capabilities.get(idx).copied())
    }
}

/// Unit costs used to calculate objective.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitCosts {
    /// Cost per distance unit travelled by trucks.
    pub truck_distance: i64,
    /// Cost per truck day.
    pub truck_day: i64,
    /// Cost per used truck.
    pub truck: i64,
    /// Cost per distance unit travelled by technicians.
    pub technician_distance: i64,
    /// Cost per technician day.
    pub technician_day: i64,
    /// Cost per used technician.
    pub technician: i64,
}

/// A problem instance. It is not supposed to be changed after reading.
#[derive(Clone, Debug, Default)]
pub struct Instance {
    /// Dataset name.
    pub dataset: String,
    /// Instance name.
    pub name: String,
    /// Planning horizon length.
    pub days: i64,
    /// Truck capacity.
    pub truck_capacity: i64,
    /// Max distance travelled by a truck per day.
    pub truck_max_distance: i64,
    /// Unit costs.
    pub costs: UnitCosts,
    /// Machine types.
    pub machines: Vec<Machine>,
    /// Locations, the first one is the depot.
    pub locations: Vec<Location>,
    /// Requests.
    pub requests: Vec<Request>,
    /// Technicians.
    pub technicians: Vec<Technician>,
    /// Distances listed explicitly in the instance, if any.
    pub given_distances: Option<DistanceMatrix>,

    distances: OnceCell<DistanceMatrix>,
}

impl Instance {
    /// Returns distance matrix calculated from location coordinates. It is created on first use.
    pub fn distances(&self) -> &DistanceMatrix {
        self.distances.get_or_init(|| DistanceMatrix::from_locations(self.locations.as_slice()))
    }

    /// Returns distance between two locations specified by their ids.
    pub fn distance(&self, from_location_id: i64, to_location_id: i64) -> Option<i64> {
        self.distances().get(to_index(from_location_id)?, to_index(to_location_id)?)
    }

    /// Compares given distances with calculated ones.
    pub fn check_distances(&self) -> DistanceCheck {
        match self.given_distances.as_ref() {
            Some(given) => given.compare(self.distances()),
            None => DistanceCheck::NotGiven,
        }
    }

    /// Gets machine type by its id.
    pub fn machine(&self, id: i64) -> Option<&Machine> {
        to_index(id).and_then(|idx| self.machines.get(idx))
    }

    /// Gets location by its id.
    pub fn location(&self, id: i64) -> Option<&Location> {
        to_index(id).and_then(|idx| self.locations.get(idx))
    }

    /// Gets request by its id.
    pub fn request(&self, id: i64) -> Option<&Request> {
        to_index(id).and_then(|idx| self.requests.get(idx))
    }

    /// Gets technician by its id.
    pub fn technician(&self, id: i64) -> Option<&Technician> {
        to_index(id).and_then(|idx| self.technicians.get(idx))
    }

    /// Returns the depot location id.
    pub fn depot_location_id(&self) -> i64 {
        1
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        // NOTE the calculated matrix is a cache, it is derived from locations
        self.dataset == other.dataset
            && self.name == other.name
            && self.days == other.days
            && self.truck_capacity == other.truck_capacity
            && self.truck_max_distance == other.truck_max_distance
            && self.costs == other.costs
            && self.machines == other.machines
            && self.locations == other.locations
            && self.requests == other.requests
            && self.technicians == other.technicians
            && self.given_distances == other.given_distances
    }
}

impl Eq for Instance {}

/// Converts 1-based id into 0-based index.
pub(crate) fn to_index(id: i64) -> Option<usize> {
    usize::try_from(id).ok().and_then(|id| id.checked_sub(1))
}
