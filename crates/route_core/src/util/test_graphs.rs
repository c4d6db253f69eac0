use crate::{connection, constants::Weight, graph::Graph};

pub fn generate_simple_graph() -> Graph {
    // A -----4----> C
    //  \           ^
    //   1         2
    //    \       /
    //     > B --
    let mut g = Graph::new();

    connection!(g, "A" => "B", 1.0);
    connection!(g, "B" => "C", 2.0);
    connection!(g, "A" => "C", 4.0);

    g
}

pub fn generate_delivery_graph() -> Graph {
    // Depot     -> Market 4, Harbor 11, Warehouse 2
    // Warehouse -> Market 3, Airport 20
    // Market    -> Harbor 5, Station 9
    // Harbor    -> Station 3
    // Station   -> Airport 2, Depot 6
    let mut g = Graph::new();

    connection!(g, "Depot" => "Market", 4.0);
    connection!(g, "Depot" => "Harbor", 11.0);
    connection!(g, "Depot" => "Warehouse", 2.0);
    connection!(g, "Warehouse" => "Market", 3.0);
    connection!(g, "Warehouse" => "Airport", 20.0);
    connection!(g, "Market" => "Harbor", 5.0);
    connection!(g, "Market" => "Station", 9.0);
    connection!(g, "Harbor" => "Station", 3.0);
    connection!(g, "Station" => "Airport", 2.0);
    connection!(g, "Station" => "Depot", 6.0);

    g
}

/// Grid of `width` x `height` locations named `x:y`, with connections to the
/// right and downwards plus a few long diagonal shortcuts.
pub fn generate_grid_graph(width: usize, height: usize) -> Graph {
    let mut g = Graph::with_capacity(width * height, 3 * width * height);
    let name = |x: usize, y: usize| format!("{}:{}", x, y);
    let cost = |x: usize, y: usize| ((x * 7 + y * 13) % 10 + 1) as Weight;

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                connection!(g, name(x, y) => name(x + 1, y), cost(x, y));
            }
            if y + 1 < height {
                connection!(g, name(x, y) => name(x, y + 1), cost(y, x));
            }
            if (x + y) % 5 == 0 && x + 1 < width && y + 1 < height {
                connection!(g, name(x, y) => name(x + 1, y + 1), 12.0);
            }
        }
    }

    g
}
