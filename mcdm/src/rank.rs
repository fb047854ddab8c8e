use std::cmp::Reverse;

use crate::Normalized;

/// Dense competition ("min") ranks for the given scores: the highest score
/// gets rank 1, tied scores share the minimum rank of their group, and the
/// rank after a tied group continues from the group's last position. Scores
/// `[0.9, 0.9, 0.7]` rank as `[1, 1, 3]`.
pub fn dense_min_ranks(scores: &[Normalized]) -> Vec<u32> {
    let order = permutation::sort_unstable_by_key(scores, |score| Reverse(*score));
    let sorted = order.apply_slice(scores);

    let mut ranks: Vec<u32> = Vec::with_capacity(sorted.len());
    for (position, score) in sorted.iter().enumerate() {
        if position > 0 && *score == sorted[position - 1] {
            ranks.push(ranks[position - 1]);
        } else {
            ranks.push(position as u32 + 1);
        }
    }
    order.inverse().apply_slice_in_place(&mut ranks);
    ranks
}

#[cfg(test)]
mod test {
    use super::dense_min_ranks;
    use crate::Normalized;

    fn scores(values: &[f64]) -> Vec<Normalized> {
        values
            .iter()
            .map(|v| Normalized::new(*v).unwrap())
            .collect()
    }

    #[test]
    fn ties_share_the_minimum_rank() {
        assert_eq!(dense_min_ranks(&scores(&[0.9, 0.9, 0.7])), vec![1, 1, 3]);
    }

    #[test]
    fn distinct_scores_rank_by_descending_score() {
        assert_eq!(dense_min_ranks(&scores(&[0.2, 0.9, 0.5])), vec![3, 1, 2]);
    }

    #[test]
    fn all_tied_scores_share_rank_one() {
        assert_eq!(dense_min_ranks(&scores(&[0.5; 4])), vec![1, 1, 1, 1]);
    }

    #[test]
    fn tied_group_in_the_middle_skips_ranks() {
        assert_eq!(
            dense_min_ranks(&scores(&[1.0, 0.6, 0.6, 0.6, 0.3])),
            vec![1, 2, 2, 2, 5]
        );
    }
}
