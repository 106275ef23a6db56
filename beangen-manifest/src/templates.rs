//! Built-in artifact templates.
//!
//! Used when beangen.toml does not override `bean_template` or
//! `sql_map_template`. Scalars substitute with `${name}`; the field list
//! iterates with `{% for field in fieldList %}`, and `capfirst` uppercases
//! only the first letter of accessor names.

/// Default bean class template.
pub const DEFAULT_BEAN_TEMPLATE: &str = r#"package ${package};

/**
 * Generated from table ${tableName}.
 */
public class ${name} {
{% for field in fieldList %}    private ${field.type} ${field.name};
{% endfor %}
{% for field in fieldList %}    public ${field.type} get${field.name|capfirst}() {
        return this.${field.name};
    }

    public void set${field.name|capfirst}(${field.type} ${field.name}) {
        this.${field.name} = ${field.name};
    }

{% endfor %}}
"#;

/// Default SQL map template.
pub const DEFAULT_SQL_MAP_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE sqlMap PUBLIC "-//ibatis.apache.org//DTD SQL Map 2.0//EN"
    "http://ibatis.apache.org/dtd/sql-map-2.dtd">
<sqlMap namespace="${className}">
    <typeAlias alias="${className}" type="${FQCN}"/>
</sqlMap>
"#;
