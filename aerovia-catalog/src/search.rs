use aerovia_shared::Route;

/// All simple paths from `origin` to `destination` over the given route
/// edges, using at most `max_legs` flights.
///
/// Pure depth-first enumeration; no airport is visited twice within one
/// path. Each result is the ordered stop list, origin and destination
/// included.
pub fn paths_between(
    edges: &[Route],
    origin: &str,
    destination: &str,
    max_legs: usize,
) -> Vec<Vec<String>> {
    if origin == destination || max_legs == 0 {
        return Vec::new();
    }

    let mut found = Vec::new();
    let mut trail = vec![origin.to_string()];
    walk(edges, origin, destination, max_legs, &mut trail, &mut found);
    found
}

fn walk(
    edges: &[Route],
    here: &str,
    destination: &str,
    legs_left: usize,
    trail: &mut Vec<String>,
    found: &mut Vec<Vec<String>>,
) {
    if legs_left == 0 {
        return;
    }

    for edge in edges.iter().filter(|e| e.origin == here) {
        if edge.destination == destination {
            let mut path = trail.clone();
            path.push(destination.to_string());
            found.push(path);
            continue;
        }
        if trail.iter().any(|stop| *stop == edge.destination) {
            continue;
        }

        trail.push(edge.destination.clone());
        walk(edges, &edge.destination, destination, legs_left - 1, trail, found);
        trail.pop();
    }
}
