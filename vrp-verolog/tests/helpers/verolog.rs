/// Size and idle penalty.
pub type MachineData = (i64, i64);
/// Customer location id, from day, to day, machine id and amount.
pub type RequestData = (i64, i64, i64, i64, i64);
/// Home location id, max day distance, max installations and capabilities.
pub type TechnicianData = (i64, i64, i64, Vec<i64>);

/// Builds instance text. Entity ids are assigned in order of adding.
pub struct InstanceBuilder {
    name: String,
    days: i64,
    truck: (i64, i64),
    costs: [i64; 6],
    machines: Vec<MachineData>,
    locations: Vec<(i64, i64)>,
    requests: Vec<RequestData>,
    technicians: Vec<TechnicianData>,
    distances: Option<Vec<Vec<i64>>>,
}

impl Default for InstanceBuilder {
    fn default() -> Self {
        Self {
            name: "test".to_string(),
            days: 3,
            truck: (10, 1000),
            costs: [1, 10, 100, 1, 10, 100],
            machines: vec![],
            locations: vec![],
            requests: vec![],
            technicians: vec![],
            distances: None,
        }
    }
}

impl InstanceBuilder {
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn set_days(&mut self, days: i64) -> &mut Self {
        self.days = days;
        self
    }

    pub fn set_truck(&mut self, capacity: i64, max_distance: i64) -> &mut Self {
        self.truck = (capacity, max_distance);
        self
    }

    /// Sets truck distance, truck day, truck, technician distance, technician day and technician costs.
    pub fn set_costs(&mut self, costs: [i64; 6]) -> &mut Self {
        self.costs = costs;
        self
    }

    pub fn add_machine(&mut self, machine: MachineData) -> &mut Self {
        self.machines.push(machine);
        self
    }

    pub fn add_location(&mut self, location: (i64, i64)) -> &mut Self {
        self.locations.push(location);
        self
    }

    pub fn add_request(&mut self, request: RequestData) -> &mut Self {
        self.requests.push(request);
        self
    }

    pub fn add_technician(&mut self, technician: TechnicianData) -> &mut Self {
        self.technicians.push(technician);
        self
    }

    pub fn set_distances(&mut self, distances: Vec<Vec<i64>>) -> &mut Self {
        self.distances = Some(distances);
        self
    }

    pub fn build(&self) -> String {
        let mut data = String::new();
        let [truck_distance, truck_day, truck, technician_distance, technician_day, technician] = self.costs;

        data.push_str(format!("DATASET = VeRoLog solver challenge 2019\nNAME = {}\n\n", self.name).as_str());
        data.push_str(format!("DAYS = {}\nTRUCK_CAPACITY = {}\n", self.days, self.truck.0).as_str());
        data.push_str(format!("TRUCK_MAX_DISTANCE = {}\n\n", self.truck.1).as_str());
        data.push_str(format!("TRUCK_DISTANCE_COST = {truck_distance}\nTRUCK_DAY_COST = {truck_day}\n").as_str());
        data.push_str(format!("TRUCK_COST = {truck}\nTECHNICIAN_DISTANCE_COST = {technician_distance}\n").as_str());
        data.push_str(format!("TECHNICIAN_DAY_COST = {technician_day}\nTECHNICIAN_COST = {technician}\n\n").as_str());

        data.push_str(format!("MACHINES = {}\n", self.machines.len()).as_str());
        self.machines.iter().zip(1..).for_each(|((size, penalty), id)| {
            data.push_str(format!("{id} {size} {penalty}\n").as_str());
        });

        data.push_str(format!("\nLOCATIONS = {}\n", self.locations.len()).as_str());
        self.locations.iter().zip(1..).for_each(|((x, y), id)| {
            data.push_str(format!("{id} {x} {y}\n").as_str());
        });

        data.push_str(format!("\nREQUESTS = {}\n", self.requests.len()).as_str());
        self.requests.iter().zip(1..).for_each(|((location, from, to, machine, amount), id)| {
            data.push_str(format!("{id} {location} {from} {to} {machine} {amount}\n").as_str());
        });

        data.push_str(format!("\nTECHNICIANS = {}\n", self.technicians.len()).as_str());
        self.technicians.iter().zip(1..).for_each(|((location, distance, installations, capabilities), id)| {
            let capabilities = capabilities.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(" ");
            data.push_str(format!("{id} {location} {distance} {installations} {capabilities}\n").as_str());
        });

        if let Some(distances) = &self.distances {
            data.push_str("\nDISTANCE\n");
            distances.iter().for_each(|row| {
                let row = row.iter().map(|value| value.to_string()).collect::<Vec<_>>().join("\t");
                data.push_str(format!("{row}\n").as_str());
            });
        }

        data
    }
}

/// Builds solution text. Each route starts with vehicle id, declared route counts match routes.
#[derive(Default)]
pub struct SolutionBuilder {
    costs: Vec<(String, i64)>,
    days: Vec<(i64, Vec<Vec<i64>>, Vec<Vec<i64>>)>,
}

impl SolutionBuilder {
    pub fn add_cost(&mut self, keyword: &str, value: i64) -> &mut Self {
        self.costs.push((keyword.to_string(), value));
        self
    }

    pub fn add_day(&mut self, day: i64, trucks: Vec<Vec<i64>>, technicians: Vec<Vec<i64>>) -> &mut Self {
        self.days.push((day, trucks, technicians));
        self
    }

    pub fn build(&self) -> String {
        let mut data = "DATASET = VeRoLog solver challenge 2019\nNAME = test\n\n".to_string();

        self.costs.iter().for_each(|(keyword, value)| data.push_str(format!("{keyword} = {value}\n").as_str()));

        let join = |route: &Vec<i64>| route.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(" ");
        self.days.iter().for_each(|(day, trucks, technicians)| {
            data.push_str(format!("\nDAY = {day}\nNUMBER_OF_TRUCKS = {}\n", trucks.len()).as_str());
            trucks.iter().for_each(|route| data.push_str(format!("{}\n", join(route)).as_str()));
            data.push_str(format!("NUMBER_OF_TECHNICIANS = {}\n", technicians.len()).as_str());
            technicians.iter().for_each(|route| data.push_str(format!("{}\n", join(route)).as_str()));
        });

        data
    }
}

/// Creates an instance with one depot location, one machine type, one request within days 1..3
/// and one technician living at the depot.
pub fn create_single_request_instance() -> String {
    InstanceBuilder::default()
        .set_days(3)
        .add_machine((1, 1))
        .add_location((0, 0))
        .add_request((1, 1, 3, 1, 1))
        .add_technician((1, 100, 5, vec![1]))
        .build()
}

/// Creates an instance with a depot, two customers and two machine types. The first technician
/// lives at the depot and can install only the first machine type, the second lives at the
/// second customer and can install both.
pub fn create_two_customers_instance() -> String {
    InstanceBuilder::default()
        .set_days(5)
        .set_truck(10, 100)
        .add_machine((2, 3))
        .add_machine((5, 7))
        .add_location((0, 0))
        .add_location((3, 4))
        .add_location((6, 8))
        .add_request((2, 1, 2, 1, 2))
        .add_request((3, 2, 4, 2, 1))
        .add_technician((1, 30, 2, vec![1, 0]))
        .add_technician((3, 30, 2, vec![1, 1]))
        .build()
}
