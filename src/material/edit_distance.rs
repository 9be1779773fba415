//! 레벤슈타인 편집 거리.

/// 두 문자열 사이의 레벤슈타인 거리(삽입/삭제/치환 최소 횟수)를 계산한다.
///
/// 문자 단위(`char`)로 비교하며, 짧은 쪽 문자열로 안쪽 루프를 돌려 두 줄 분량의
/// 메모리만 사용한다. 피연산자 순서는 결과에 영향을 주지 않는다.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() < b.len() { (&b, &a) } else { (&a, &b) };

    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current: Vec<usize> = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            let substitution = previous[j] + usize::from(lc != sc);
            current[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}
