//! Tab titles by key

/// Opened right after login and when the address bar names no tab
pub const HOME_TAB: &str = "a002_product";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Painel",
        "d401_analytics" => "Análises",
        "a002_product" => "Gestão de Estoque",
        "a002_product_new" => "Cadastro de Produto",
        "a003_inventory" => "Inventário",
        "a004_movement" => "Movimentações",
        "a001_store" => "Lojas",
        "a005_user" => "Usuários",
        _ => "Página",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key(HOME_TAB), "Gestão de Estoque");
        assert_eq!(tab_label_for_key("a005_user"), "Usuários");
        assert_eq!(tab_label_for_key("nope"), "Página");
    }
}
