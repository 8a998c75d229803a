use nninv_db::EntityPair;
use serde::Serialize;

/// Ids of the pairs either side of the current one in listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub previous: Option<i64>,
    pub next: Option<i64>,
}

/// Both neighbors are `None` when `id` is not in `pairs`.
pub fn neighbors(pairs: &[EntityPair], id: i64) -> Neighbors {
    let Some(pos) = pairs.iter().position(|p| p.id == id) else {
        return Neighbors::default();
    };

    Neighbors {
        previous: pos.checked_sub(1).map(|i| pairs[i].id),
        next: pairs.get(pos + 1).map(|p| p.id),
    }
}
