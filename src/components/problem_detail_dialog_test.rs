use super::*;

#[test]
fn detail_rows_cover_all_fields_in_order() {
    let problem: Problem = serde_json::from_value(serde_json::json!({
        "id": "p-7",
        "type": "karnaugh",
        "metadata": {"title": "Mapa 4x4", "difficulty": 3, "topic": "simplificación", "tags": ["kmap", "sop"]},
        "statement": {"text": "Simplifica F"},
        "solution": {"explanation": "F = A'B + C"}
    }))
    .unwrap();

    let labels: Vec<_> = detail_rows(&problem).into_iter().map(|(label, _)| label).collect();
    assert_eq!(
        labels,
        vec!["ID", "Tipo", "Título", "Dificultad", "Tema", "Etiquetas", "Enunciado", "Solución"]
    );
    let rows = detail_rows(&problem);
    assert_eq!(rows[0].1, "p-7");
    assert_eq!(rows[3].1, "3");
    assert_eq!(rows[5].1, "kmap, sop");
    assert_eq!(rows[7].1, "F = A'B + C");
}

#[test]
fn detail_rows_fall_back_for_missing_fields() {
    let problem: Problem = serde_json::from_value(serde_json::json!({"id": "bare"})).unwrap();
    let rows = detail_rows(&problem);
    assert_eq!(rows[1].1, "desconocido");
    assert_eq!(rows[2].1, "bare");
    assert_eq!(rows[3].1, "-");
    assert_eq!(rows[4].1, "-");
    assert_eq!(rows[5].1, "");
}
