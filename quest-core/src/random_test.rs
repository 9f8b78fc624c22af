#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use crate::clues::ClueIndex;

    const CLUES: [&str; 9] = [
        "Um jornal velho sobre a mesa, com a data de 1920.",
        "Restos de um banquete suntuoso, mas sem talheres.",
        "Um livro de Sherlock Holmes aberto em uma pagina especifica.",
        "Uma faca de prata reluzente na pia.",
        "Um frasco de veneno vazio e etiquetado como 'Raticida'.",
        "Cartas rasgadas revelam um desentendimento familiar.",
        "Rastros de pegadas frescas no chao umido.",
        "Um relogio de bolso parado as 03:15.",
        "Uma toalha molhada e suja de terra.",
    ];

    #[test]
    fn any_insertion_order_yields_sorted_traversal() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut expected: Vec<&str> = CLUES.to_vec();
        expected.sort_unstable();

        for _ in 0..100 {
            let mut order = CLUES.to_vec();
            order.shuffle(&mut rng);

            let mut index = ClueIndex::new();
            for clue in &order {
                index.insert(clue);
            }

            let listed: Vec<&str> = index.iter().collect();
            assert_eq!(listed, expected, "insertion order: {order:?}");
        }
    }

    #[test]
    fn node_count_equals_distinct_clues_under_repeats() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..100 {
            // Insert every clue several times in a shuffled stream.
            let mut stream: Vec<&str> = CLUES
                .iter()
                .flat_map(|clue| std::iter::repeat(*clue).take(3))
                .collect();
            stream.shuffle(&mut rng);

            let mut index = ClueIndex::new();
            for clue in stream {
                index.insert(clue);
            }
            assert_eq!(index.len(), CLUES.len());
        }
    }
}
