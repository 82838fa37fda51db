use backprop_net::{Example, Matrix, Network, TrainConfig};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> backprop_net::Result<()> {
    tracing_subscriber::fmt::init();

    let examples = vec![
        Example::new(vec![1.0, 0.0], vec![1.0, 0.0]),
        Example::new(vec![1.0, 1.0], vec![0.0, 1.0]),
        Example::new(vec![0.0, 1.0], vec![1.0, 0.0]),
        Example::new(vec![0.0, 0.0], vec![0.0, 1.0]),
    ];

    let hidden_width = 4;
    let mut rng = StdRng::seed_from_u64(540);
    let hidden_weights = Matrix::uniform(hidden_width, 3, 1.0, &mut rng);
    let output_weights = Matrix::uniform(2, hidden_width + 1, 1.0, &mut rng);

    let mut network = Network::with_config(
        examples.clone(),
        hidden_width,
        TrainConfig::new(0.1, 2000),
        hidden_weights,
        output_weights,
    )?;

    println!("accuracy before training: {:.2}", network.accuracy(&examples)?);
    network.train()?;
    println!("accuracy after training:  {:.2}", network.accuracy(&examples)?);

    for example in &examples {
        let class = network.classify(example)?;
        println!(
            "Input: {:?} -> class {} (outputs {:.4?})",
            example.attributes,
            class,
            network.output_activations()
        );
    }
    Ok(())
}
