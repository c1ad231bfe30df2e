#[cfg(test)]
#[path = "../../tests/unit/solution/cost_test.rs"]
mod cost_test;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Defines cost fields, their keywords in text format and the structures keeping their values.
macro_rules! define_cost_fields {
    ($($field:ident => $keyword:literal, $description:literal;)+) => {
        paste::paste! {
            /// A cost metric of a solution.
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            pub enum CostField {
                $(
                    #[doc = " A " $description "."]
                    [<$field:camel>],
                )+
            }

            impl CostField {
                /// All cost fields in order of writing.
                pub const ALL: &'static [CostField] = &[$(CostField::[<$field:camel>],)+];

                /// Returns a keyword used in text format.
                pub fn keyword(&self) -> &'static str {
                    match self {
                        $(CostField::[<$field:camel>] => $keyword,)+
                    }
                }

                /// Returns a human readable description.
                pub fn description(&self) -> &'static str {
                    match self {
                        $(CostField::[<$field:camel>] => $description,)+
                    }
                }
            }

            /// Cost values claimed by a solution. Each of them is optional.
            #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
            #[serde(rename_all = "camelCase")]
            pub struct GivenCost {
                $(
                    #[doc = " A claimed " $description "."]
                    pub $field: Option<i64>,
                )+
            }

            impl GivenCost {
                /// Gets a claimed value.
                pub fn get(&self, field: CostField) -> Option<i64> {
                    match field {
                        $(CostField::[<$field:camel>] => self.$field,)+
                    }
                }

                /// Sets a claimed value.
                pub fn set(&mut self, field: CostField, value: i64) {
                    match field {
                        $(CostField::[<$field:camel>] => self.$field = Some(value),)+
                    }
                }
            }

            /// Cost values calculated by replaying a solution together with their per-day
            /// cumulative series which span the whole planning horizon.
            #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
            #[serde(rename_all = "camelCase")]
            pub struct CalculatedCost {
                $(
                    #[doc = " A calculated " $description "."]
                    pub $field: i64,
                )+
                $(
                    #[doc = " A cumulative " $description " at the end of each day."]
                    pub [<$field _cumulative>]: Vec<i64>,
                )+
            }

            impl CalculatedCost {
                /// Gets a calculated value.
                pub fn get(&self, field: CostField) -> i64 {
                    match field {
                        $(CostField::[<$field:camel>] => self.$field,)+
                    }
                }

                /// Gets a cumulative series.
                pub fn cumulative(&self, field: CostField) -> &[i64] {
                    match field {
                        $(CostField::[<$field:camel>] => self.[<$field _cumulative>].as_slice(),)+
                    }
                }
            }
        }
    };
}

define_cost_fields! {
    truck_distance => "TRUCK_DISTANCE", "truck distance";
    truck_days => "NUMBER_OF_TRUCK_DAYS", "number of truck days";
    trucks_used => "NUMBER_OF_TRUCKS_USED", "number of trucks used";
    technician_distance => "TECHNICIAN_DISTANCE", "technician distance";
    technician_days => "NUMBER_OF_TECHNICIAN_DAYS", "number of technician days";
    technicians_used => "NUMBER_OF_TECHNICIANS_USED", "number of technicians used";
    idle_machine_cost => "IDLE_MACHINE_COSTS", "idle machine cost";
    total_cost => "TOTAL_COST", "total cost";
}

lazy_static! {
    static ref COST_FIELDS: FxHashMap<&'static str, CostField> =
        CostField::ALL.iter().map(|field| (field.keyword(), *field)).collect();
}

impl CostField {
    /// Finds cost field by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<CostField> {
        COST_FIELDS.get(keyword).copied()
    }
}

/// Claimed and calculated costs of a solution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SolutionCost {
    /// Values claimed by the solution.
    pub given: GivenCost,
    /// Values calculated by checker, if the solution was evaluated.
    pub calculated: Option<CalculatedCost>,
}
