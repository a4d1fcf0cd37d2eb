use std::fmt;
use std::marker::PhantomData;

/// Integer id tagged with the kind of object it refers to, so a vehicle id
/// can never be passed where a node id is expected.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Id<T> {
    id: usize,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub const fn new(id: usize) -> Self {
        Id { id, _marker: PhantomData }
    }

    pub fn value(&self) -> usize {
        self.id
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct NodeTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct VehicleTag;

pub type NodeId = Id<NodeTag>;
pub type VehicleId = Id<VehicleTag>;

impl Id<NodeTag> {
    /// The depot is always node 0.
    pub const DEPOT: NodeId = NodeId::new(0);

    pub fn is_depot(&self) -> bool {
        *self == Self::DEPOT
    }
}
